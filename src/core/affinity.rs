//! Elemental affinity display table
//!
//! Maps the element names used in roster data ("Fire", "Electric", ...) to a
//! display colour and icon key. Unknown names still render, in gray.

/// Display data for one element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affinity {
    pub name: &'static str,
    /// RGB foreground colour
    pub color: (u8, u8, u8),
    pub icon: &'static str,
}

const UNKNOWN_COLOR: (u8, u8, u8) = (0x6B, 0x72, 0x80);

const AFFINITIES: &[Affinity] = &[
    Affinity { name: "Physical", color: (0x8B, 0x45, 0x13), icon: "Strike" },
    Affinity { name: "Fire", color: (0xDC, 0x26, 0x26), icon: "Fire" },
    Affinity { name: "Wind", color: (0x05, 0x96, 0x69), icon: "Wind" },
    Affinity { name: "Nuclear", color: (0x7C, 0x3A, 0xED), icon: "Nuclear" },
    Affinity { name: "Ice", color: (0x02, 0x84, 0xC7), icon: "Ice" },
    Affinity { name: "Electric", color: (0xD9, 0x77, 0x06), icon: "Electric" },
    Affinity { name: "Psychic", color: (0xBE, 0x18, 0x5D), icon: "Psi" },
    Affinity { name: "Light", color: (0xF5, 0x9E, 0x0B), icon: "Light" },
    Affinity { name: "Dark", color: (0x1F, 0x29, 0x37), icon: "Dark" },
    Affinity { name: "Divine", color: (0x7C, 0x2D, 0x12), icon: "Almighty" },
    Affinity { name: "Heal", color: (0x05, 0x96, 0x69), icon: "Healing" },
    Affinity { name: "Ranged", color: (0x7C, 0x3A, 0xED), icon: "Pierce" },
    Affinity { name: "Support", color: (0x02, 0x84, 0xC7), icon: "Assist" },
    Affinity { name: "Passive", color: (0x6B, 0x72, 0x80), icon: "Passive" },
    Affinity { name: "Status", color: (0xBE, 0x18, 0x5D), icon: "Ailment" },
];

/// Look up display data for an element name
///
/// Unknown names keep their own text with a gray colour and the `Unknown` icon.
#[must_use]
pub fn affinity_for(name: &str) -> AffinityLabel<'_> {
    match AFFINITIES.iter().find(|a| a.name == name) {
        Some(&known) => AffinityLabel {
            name,
            color: known.color,
            icon: known.icon,
        },
        None => AffinityLabel {
            name,
            color: UNKNOWN_COLOR,
            icon: "Unknown",
        },
    }
}

/// Resolved affinity for a possibly unknown element name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinityLabel<'a> {
    pub name: &'a str,
    pub color: (u8, u8, u8),
    pub icon: &'static str,
}
