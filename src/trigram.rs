//! The eight trigrams and their fixed attributes.
//!
//! Every scorer in the crate reads trigram attributes from here: the canonical
//! rank used by [`crate::catalog::lookup`], the Wu-Xing element driving
//! [`crate::compatibility`], the yang strength, and the season / direction
//! labels used by the elemental synergy term.
//!
//! # Invariants
//!
//! - **Canonical order**: Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun. [`Trigram::ALL`]
//!   and the enum discriminants follow it; ranks are 1..=8 in the same order.
//! - Attributes are compile-time constants. Nothing here allocates.

use core::fmt;

// ─── Element ────────────────────────────────────────────────────────────────

/// One of the five Wu-Xing elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// All five elements in generating-cycle order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the generating cycle, 0..5.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The element this one generates (wood → fire → earth → metal → water → wood).
    pub const fn generated(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one destroys (wood → earth → water → fire → metal → wood).
    pub const fn destroyed(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// `true` if `self` generates `other`.
    pub fn generates(self, other: Element) -> bool {
        self.generated() == other
    }

    /// `true` if `self` destroys `other`.
    pub fn destroys(self, other: Element) -> bool {
        self.destroyed() == other
    }
}

// ─── Season / Direction / Family ───────────────────────────────────────────

/// Seasonal phase associated with a trigram, in cycle order.
///
/// Adjacent variants (including `LateWinter` → `Spring`) are "adjacent seasons"
/// for the elemental synergy affinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// 春
    Spring,
    /// 晩春
    LateSpring,
    /// 夏
    Summer,
    /// 晩夏
    LateSummer,
    /// 秋
    Autumn,
    /// 晩秋
    LateAutumn,
    /// 冬
    Winter,
    /// 晩冬
    LateWinter,
}

impl Season {
    const COUNT: u8 = 8;

    /// `true` when the two seasons are neighbours in the yearly cycle.
    pub fn is_adjacent(self, other: Season) -> bool {
        let a = self as u8;
        let b = other as u8;
        (a + 1) % Self::COUNT == b || (b + 1) % Self::COUNT == a
    }
}

/// Compass direction (post-heaven arrangement).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// 北
    North,
    /// 北東
    NorthEast,
    /// 東
    East,
    /// 南東
    SouthEast,
    /// 南
    South,
    /// 南西
    SouthWest,
    /// 西
    West,
    /// 北西
    NorthWest,
}

/// Family role of a trigram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FamilyRole {
    /// 父 (Qian)
    Father,
    /// 母 (Kun)
    Mother,
    /// 長男 (Zhen)
    EldestSon,
    /// 中男 (Kan)
    MiddleSon,
    /// 少男 (Gen)
    YoungestSon,
    /// 長女 (Xun)
    EldestDaughter,
    /// 中女 (Li)
    MiddleDaughter,
    /// 少女 (Dui)
    YoungestDaughter,
}

impl FamilyRole {
    /// `true` for Father and Mother.
    pub fn is_parent(self) -> bool {
        matches!(self, FamilyRole::Father | FamilyRole::Mother)
    }

    /// Birth order among the children: 1 eldest, 2 middle, 3 youngest; 0 for parents.
    pub fn generation_rank(self) -> u8 {
        match self {
            FamilyRole::Father | FamilyRole::Mother => 0,
            FamilyRole::EldestSon | FamilyRole::EldestDaughter => 1,
            FamilyRole::MiddleSon | FamilyRole::MiddleDaughter => 2,
            FamilyRole::YoungestSon | FamilyRole::YoungestDaughter => 3,
        }
    }
}

/// Yin/yang polarity classification used by the consistency analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// 陽
    Yang,
    /// 陰
    Yin,
}

// ─── Trigram ─────────────────────────────────────────────────────────────────

/// One of the eight base trigrams.
///
/// Discriminants are the zero-based canonical index; [`Trigram::rank`] is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigram {
    /// 乾 ☰ Heaven.
    Qian = 0,
    /// 兌 ☱ Lake.
    Dui = 1,
    /// 離 ☲ Fire.
    Li = 2,
    /// 震 ☳ Thunder.
    Zhen = 3,
    /// 巽 ☴ Wind.
    Xun = 4,
    /// 坎 ☵ Water.
    Kan = 5,
    /// 艮 ☶ Mountain.
    Gen = 6,
    /// 坤 ☷ Earth.
    Kun = 7,
}

impl Trigram {
    /// All eight trigrams in canonical order.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Zero-based canonical index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based canonical rank, 1..=8.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Trigram::rank`]. Returns `None` outside 1..=8.
    pub fn from_rank(rank: u8) -> Option<Trigram> {
        match rank {
            1..=8 => Some(Self::ALL[usize::from(rank - 1)]),
            _ => None,
        }
    }

    /// Single-character name, e.g. `"乾"`.
    pub const fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兌",
            Trigram::Li => "離",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    /// Natural image, e.g. `"天"` for Qian.
    pub const fn image(self) -> &'static str {
        match self {
            Trigram::Qian => "天",
            Trigram::Dui => "沢",
            Trigram::Li => "火",
            Trigram::Zhen => "雷",
            Trigram::Xun => "風",
            Trigram::Kan => "水",
            Trigram::Gen => "山",
            Trigram::Kun => "地",
        }
    }

    /// Unicode trigram symbol.
    pub const fn symbol(self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Dui => '☱',
            Trigram::Li => '☲',
            Trigram::Zhen => '☳',
            Trigram::Xun => '☴',
            Trigram::Kan => '☵',
            Trigram::Gen => '☶',
            Trigram::Kun => '☷',
        }
    }

    /// Parse a trigram from its character name, natural image, or romanised
    /// name (case-insensitive).
    pub fn parse(s: &str) -> Option<Trigram> {
        let s = s.trim();
        Self::ALL.into_iter().find(|t| {
            s == t.name()
                || s == t.image()
                || s.eq_ignore_ascii_case(t.romanized())
                || s.chars().eq(core::iter::once(t.symbol()))
        })
    }

    /// Romanised name, e.g. `"qian"`.
    pub const fn romanized(self) -> &'static str {
        match self {
            Trigram::Qian => "qian",
            Trigram::Dui => "dui",
            Trigram::Li => "li",
            Trigram::Zhen => "zhen",
            Trigram::Xun => "xun",
            Trigram::Kan => "kan",
            Trigram::Gen => "gen",
            Trigram::Kun => "kun",
        }
    }

    /// Wu-Xing element.
    pub const fn element(self) -> Element {
        match self {
            Trigram::Qian | Trigram::Dui => Element::Metal,
            Trigram::Li => Element::Fire,
            Trigram::Zhen | Trigram::Xun => Element::Wood,
            Trigram::Kan => Element::Water,
            Trigram::Gen | Trigram::Kun => Element::Earth,
        }
    }

    /// Number of yang (solid) lines, 0..=3.
    pub const fn yang_strength(self) -> u8 {
        match self {
            Trigram::Qian => 3,
            Trigram::Dui | Trigram::Li | Trigram::Xun => 2,
            Trigram::Zhen | Trigram::Kan | Trigram::Gen => 1,
            Trigram::Kun => 0,
        }
    }

    /// Lines from bottom to top, `true` = yang.
    pub const fn lines(self) -> [bool; 3] {
        match self {
            Trigram::Qian => [true, true, true],
            Trigram::Dui => [true, true, false],
            Trigram::Li => [true, false, true],
            Trigram::Zhen => [true, false, false],
            Trigram::Xun => [false, true, true],
            Trigram::Kan => [false, true, false],
            Trigram::Gen => [false, false, true],
            Trigram::Kun => [false, false, false],
        }
    }

    /// Compass position label.
    pub const fn direction(self) -> Direction {
        match self {
            Trigram::Qian => Direction::NorthWest,
            Trigram::Dui => Direction::West,
            Trigram::Li => Direction::South,
            Trigram::Zhen => Direction::East,
            Trigram::Xun => Direction::SouthEast,
            Trigram::Kan => Direction::North,
            Trigram::Gen => Direction::NorthEast,
            Trigram::Kun => Direction::SouthWest,
        }
    }

    /// Seasonal phase.
    pub const fn season(self) -> Season {
        match self {
            Trigram::Qian => Season::LateAutumn,
            Trigram::Dui => Season::Autumn,
            Trigram::Li => Season::Summer,
            Trigram::Zhen => Season::Spring,
            Trigram::Xun => Season::LateSpring,
            Trigram::Kan => Season::Winter,
            Trigram::Gen => Season::LateWinter,
            Trigram::Kun => Season::LateSummer,
        }
    }

    /// Family role.
    pub const fn family(self) -> FamilyRole {
        match self {
            Trigram::Qian => FamilyRole::Father,
            Trigram::Kun => FamilyRole::Mother,
            Trigram::Zhen => FamilyRole::EldestSon,
            Trigram::Kan => FamilyRole::MiddleSon,
            Trigram::Gen => FamilyRole::YoungestSon,
            Trigram::Xun => FamilyRole::EldestDaughter,
            Trigram::Li => FamilyRole::MiddleDaughter,
            Trigram::Dui => FamilyRole::YoungestDaughter,
        }
    }

    /// Polarity: the first four canonical trigrams are Yang, the last four Yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Trigram::Qian | Trigram::Dui | Trigram::Li | Trigram::Zhen => Polarity::Yang,
            Trigram::Xun | Trigram::Kan | Trigram::Gen | Trigram::Kun => Polarity::Yin,
        }
    }

    /// Structural stability rating in [0, 100], used by the balance evaluator.
    pub const fn stability(self) -> f64 {
        match self {
            Trigram::Qian => 85.0,
            Trigram::Dui => 75.0,
            Trigram::Li => 70.0,
            Trigram::Zhen => 65.0,
            Trigram::Xun => 72.0,
            Trigram::Kan => 68.0,
            Trigram::Gen => 90.0,
            Trigram::Kun => 95.0,
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
