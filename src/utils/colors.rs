/// Terminal color helpers built on ansi_term.
use crate::core::timer::TimerStatus;
use crate::models::Channel;
use ansi_term::Colour;

pub const GREY: Colour = Colour::Fixed(244);

/// Left in blue, right in purple, so the two counters are told apart at a
/// glance.
pub fn channel_colour(channel: Channel) -> Colour {
    match channel {
        Channel::Left => Colour::Blue,
        Channel::Right => Colour::Purple,
    }
}

/// "● running (left)", "❚❚ paused (right)", "idle".
pub fn paint_status(status: TimerStatus) -> String {
    match status {
        TimerStatus::Running(c) => Colour::Green
            .bold()
            .paint(format!("● running ({c})"))
            .to_string(),
        TimerStatus::Paused(c) => Colour::Yellow.paint(format!("❚❚ paused ({c})")).to_string(),
        TimerStatus::Idle => GREY.paint("idle").to_string(),
    }
}

/// Highlight the counter of the active channel.
pub fn paint_counter(channel: Channel, value: &str, active: bool) -> String {
    if active {
        channel_colour(channel).bold().paint(value).to_string()
    } else {
        value.to_string()
    }
}
