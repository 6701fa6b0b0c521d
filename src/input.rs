use crate::game::{Command, Direction};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit_input_helper::WinitInputHelper;

/// Command for a single key press, in the order the events arrive.
pub fn command<T>(event: &Event<'_, T>) -> Option<Command> {
    let Event::WindowEvent {
        event:
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            },
        ..
    } = event
    else {
        return None;
    };

    match key {
        VirtualKeyCode::Escape => Some(Command::Quit),
        VirtualKeyCode::Space => Some(Command::TogglePause),
        VirtualKeyCode::Up => Some(Command::Turn(Direction::Up)),
        VirtualKeyCode::Right => Some(Command::Turn(Direction::Right)),
        VirtualKeyCode::Down => Some(Command::Turn(Direction::Down)),
        VirtualKeyCode::Left => Some(Command::Turn(Direction::Left)),
        _ => None,
    }
}

/// Window close or destroy seen in the batch `input` just drained.
pub fn quit_requested(input: &WinitInputHelper) -> bool {
    input.close_requested() || input.destroyed()
}
