//! Display colors assigned to users.

use std::fmt;

use serde::{Deserialize, Serialize};
use md5::{Digest, Md5};

use super::value_object::UserName;

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// The fixed, ordered palette. The order is part of the color mapping.
pub const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

impl Color {
    /// Compute the color of a user without memoization.
    ///
    /// The MD5 digest of the UTF-8 name is read as one big-endian unsigned
    /// integer and reduced modulo the palette size, so existing users keep the
    /// colors they had on earlier deployments.
    pub fn for_user(user: &UserName) -> Self {
        let digest = Md5::digest(user.as_str().as_bytes());
        let index = digest
            .iter()
            .fold(0usize, |acc, byte| (acc * 256 + *byte as usize) % PALETTE.len());
        PALETTE[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// ANSI SGR foreground code for terminal output.
    pub fn ansi_code(&self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserName {
        UserName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_for_user_known_values() {
        // テスト項目: MD5 ダイジェストを 7 で割った余りでパレットの色が決まる
        assert_eq!(Color::for_user(&user("alice")), Color::Green);
        assert_eq!(Color::for_user(&user("bob")), Color::Blue);
        assert_eq!(Color::for_user(&user("ann")), Color::Magenta);
        assert_eq!(Color::for_user(&user("dave")), Color::Red);
        assert_eq!(Color::for_user(&user("eve")), Color::Yellow);
    }

    #[test]
    fn test_for_user_is_deterministic() {
        // テスト項目: 同じユーザー名からは常に同じ色が計算される
        for name in ["alice", "bob", "ann", "日本語ユーザー"] {
            assert_eq!(Color::for_user(&user(name)), Color::for_user(&user(name)));
        }
    }

    #[test]
    fn test_color_serializes_lowercase() {
        // テスト項目: 色は小文字の名前で JSON に変換される
        let json = serde_json::to_string(&Color::Magenta).unwrap();
        assert_eq!(json, "\"magenta\"");
        for color in PALETTE {
            assert_eq!(
                serde_json::to_string(&color).unwrap(),
                format!("\"{}\"", color.as_str())
            );
        }
    }
}
