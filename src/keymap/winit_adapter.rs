//! Adapter to convert winit key events to our Keystroke type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert winit key event data to our Keystroke type
///
/// The physical `=`/`-` keys map to `'='`/`'-'` whatever glyph Shift
/// produces, so "ctrl+shift+=" matches on layouts where the logical key is `+`.
/// Returns None if the key cannot be mapped.
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    mods: Modifiers,
) -> Option<Keystroke> {
    let physical = match physical_key {
        PhysicalKey::Code(WinitKeyCode::Equal) => Some(KeyCode::Char('=')),
        PhysicalKey::Code(WinitKeyCode::Minus) => Some(KeyCode::Char('-')),
        _ => None,
    };

    let key_code = physical.or_else(|| match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Space => Some(KeyCode::Space),

            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),

            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),

            _ => None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }

        _ => None,
    })?;

    Some(Keystroke::new(key_code, mods))
}

/// Convert winit's modifier state to ours
pub fn modifiers_from_winit(state: winit::keyboard::ModifiersState) -> Modifiers {
    Modifiers::new(
        state.control_key(),
        state.shift_key(),
        state.alt_key(),
        state.super_key(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let stroke = keystroke_from_winit(
            &Key::Character("o".into()),
            PhysicalKey::Code(WinitKeyCode::KeyO),
            Modifiers::CTRL,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('o'));
        assert_eq!(stroke.mods, Modifiers::CTRL);
    }

    #[test]
    fn test_uppercase_normalized() {
        let stroke = keystroke_from_winit(
            &Key::Character("S".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            Modifiers::SHIFT,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('s'));
    }

    #[test]
    fn test_shifted_equal_maps_to_equal() {
        // US layout: Shift+= produces '+'
        let stroke = keystroke_from_winit(
            &Key::Character("+".into()),
            PhysicalKey::Code(WinitKeyCode::Equal),
            Modifiers::CTRL | Modifiers::SHIFT,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('='));
    }

    #[test]
    fn test_shifted_minus_maps_to_minus() {
        let stroke = keystroke_from_winit(
            &Key::Character("_".into()),
            PhysicalKey::Code(WinitKeyCode::Minus),
            Modifiers::CTRL | Modifiers::SHIFT,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('-'));
    }

    #[test]
    fn test_named_key() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::Home),
            PhysicalKey::Code(WinitKeyCode::Home),
            Modifiers::CTRL,
        )
        .expect("should map");

        assert_eq!(stroke, Keystroke::new(KeyCode::Home, Modifiers::CTRL));
    }

    #[test]
    fn test_unmapped_named_key() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::F5),
            PhysicalKey::Code(WinitKeyCode::F5),
            Modifiers::NONE,
        );
        assert!(stroke.is_none());
    }
}
