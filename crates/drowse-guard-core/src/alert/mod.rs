mod playback;
mod trigger;

pub use {
    playback::{AlertPlayback, RodioPlayback},
    trigger::AlertTrigger,
};
