//! Weekday model.
//!
//! Catalog time strings identify days by single Korean glyphs
//! (월/화/수/목/금/토). The glyph is also the serialized form, so
//! snapshots round-trip against data written by earlier tools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching weekday, Monday through Saturday.
///
/// Sunday classes do not exist in the catalog and have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// 월요일 (Monday)
    #[serde(rename = "월")]
    Mon,
    /// 화요일 (Tuesday)
    #[serde(rename = "화")]
    Tue,
    /// 수요일 (Wednesday)
    #[serde(rename = "수")]
    Wed,
    /// 목요일 (Thursday)
    #[serde(rename = "목")]
    Thu,
    /// 금요일 (Friday)
    #[serde(rename = "금")]
    Fri,
    /// 토요일 (Saturday)
    #[serde(rename = "토")]
    Sat,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 6] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat];

    /// Parses a day from its Korean glyph.
    pub fn from_glyph(ch: char) -> Option<Day> {
        match ch {
            '월' => Some(Day::Mon),
            '화' => Some(Day::Tue),
            '수' => Some(Day::Wed),
            '목' => Some(Day::Thu),
            '금' => Some(Day::Fri),
            '토' => Some(Day::Sat),
            _ => None,
        }
    }

    /// The Korean glyph for this day.
    pub fn glyph(self) -> char {
        match self {
            Day::Mon => '월',
            Day::Tue => '화',
            Day::Wed => '수',
            Day::Thu => '목',
            Day::Fri => '금',
            Day::Sat => '토',
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
