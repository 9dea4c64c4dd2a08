use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued inputs to human-controlled paddle intents.
///
/// Inputs for AI-controlled paddles are dropped.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (side, input) in queue.drain() {
        for (_entity, (paddle, intent, controller)) in
            world.query_mut::<(&Paddle, &mut PaddleIntent, &Controller)>()
        {
            if paddle.side != side || *controller != Controller::Human {
                continue;
            }
            match input {
                PaddleInput::Direction(dir) => {
                    intent.dir = dir.signum();
                    intent.target_y = None;
                }
                PaddleInput::PointerY(y) => {
                    intent.dir = 0;
                    intent.target_y = Some(y);
                }
            }
        }
    }
}
