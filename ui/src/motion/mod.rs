//! Timer-driven presentation state: the home typewriter and the pipeline stepper.
//!
//! Both are plain state machines. The views own the timers and call into them.

mod steps;
mod typewriter;

pub use steps::StepCycle;
pub use typewriter::Typewriter;
