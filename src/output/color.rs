//! Color schemes for rendered tree lines

use std::io::Write;

use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Which role a painted piece of text plays in a tree line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Directory,
    File,
    Metadata,
}

impl Role {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Role::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
            Role::File => spec.set_fg(Some(Color::Green)),
            Role::Metadata => spec.set_fg(Some(Color::Yellow)),
        };
        spec
    }
}

/// Chosen once at startup and handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Plain,
    /// Wrap names and metadata in ANSI escapes, resetting after each piece.
    Ansi,
}

impl ColorScheme {
    pub fn from_flag(color: bool) -> Self {
        if color {
            ColorScheme::Ansi
        } else {
            ColorScheme::Plain
        }
    }

    /// Paint `text` for the given role, appending it to `out`.
    pub fn paint(self, out: &mut String, text: &str, role: Role) {
        match self {
            ColorScheme::Plain => out.push_str(text),
            ColorScheme::Ansi => match ansi_painted(text, role) {
                Some(painted) => out.push_str(&painted),
                None => out.push_str(text),
            },
        }
    }
}

fn ansi_painted(text: &str, role: Role) -> Option<String> {
    let mut ansi = Ansi::new(Vec::new());
    ansi.set_color(&role.spec()).ok()?;
    ansi.write_all(text.as_bytes()).ok()?;
    ansi.reset().ok()?;
    String::from_utf8(ansi.into_inner()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_escapes() {
        let mut out = String::new();
        ColorScheme::Plain.paint(&mut out, "src", Role::Directory);
        assert_eq!(out, "src");
    }

    #[test]
    fn test_ansi_wraps_and_resets() {
        let mut out = String::new();
        ColorScheme::Ansi.paint(&mut out, "main.rs", Role::File);
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("main.rs"));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_roles_use_distinct_colors() {
        let mut dir = String::new();
        let mut file = String::new();
        let mut meta = String::new();
        ColorScheme::Ansi.paint(&mut dir, "x", Role::Directory);
        ColorScheme::Ansi.paint(&mut file, "x", Role::File);
        ColorScheme::Ansi.paint(&mut meta, "x", Role::Metadata);
        assert_ne!(dir, file);
        assert_ne!(file, meta);
        assert_ne!(dir, meta);
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(ColorScheme::from_flag(true), ColorScheme::Ansi);
        assert_eq!(ColorScheme::from_flag(false), ColorScheme::Plain);
    }
}
