//! Bar-by-bar flowchart of the catalog.
//!
//! Each of the twelve nodes lists the chord choices heard at that bar and
//! which catalog variations take each one. Reading a variation's path
//! through the nodes gives a simplified view of its harmony; compound bars
//! are often reduced to one chord, and bar 8 of variations 11-17 is charted
//! as `I7/Imaj`.

use serde::Serialize;

/// One chord choice at a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowChoice {
    pub chord: &'static str,
    pub variations: &'static [u32],
    pub next_bar: usize,
}

/// The choices available at one bar (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub bar: usize,
    pub choices: &'static [FlowChoice],
}

const fn choice(chord: &'static str, variations: &'static [u32], next_bar: usize) -> FlowChoice {
    FlowChoice {
        chord,
        variations,
        next_bar,
    }
}

#[rustfmt::skip]
pub static FLOWCHART: [FlowNode; 12] = [
    FlowNode { bar: 1, choices: &[
        choice("I7", &[1, 2, 3, 4, 5, 6, 7, 8, 9], 2),
        choice("Imaj", &[10, 11, 12, 13, 14, 15, 17], 2),
        choice("#i-", &[16], 2),
    ] },
    FlowNode { bar: 2, choices: &[
        choice("I7", &[1, 2], 3),
        choice("IV7", &[3, 4, 5, 6, 7, 8, 9], 3),
        choice("IVmaj", &[12, 13], 3),
        choice("vii-", &[10, 14, 15, 16], 3),
    ] },
    FlowNode { bar: 3, choices: &[
        choice("I7", &[1, 2, 3, 4, 5, 6, 7, 8, 9], 4),
        choice("vi-", &[10, 14, 15], 4),
        choice("iii-", &[12, 13], 4),
    ] },
    FlowNode { bar: 4, choices: &[
        choice("I7", &[1, 2, 3, 4, 5, 6], 5),
        choice("v- I7", &[7, 8, 9, 10, 14, 16], 5),
        choice("#i-", &[12, 13, 15], 5),
    ] },
    FlowNode { bar: 5, choices: &[
        choice("IV7", &[1, 2, 3, 4, 5, 7, 8, 9, 10], 6),
        choice("IVmaj", &[11, 12, 13, 14, 15, 16, 17], 6),
    ] },
    FlowNode { bar: 6, choices: &[
        choice("IV7", &[1, 2, 3, 4, 5, 9], 7),
        choice("VII7", &[6, 7, 8], 7),
        choice("#iv°7", &[10], 7),
        choice("iv-", &[11], 7),
        choice("Imaj", &[12, 13, 16, 17], 7),
    ] },
    FlowNode { bar: 7, choices: &[
        choice("I7", &[1, 2, 3, 4, 5, 6, 7, 9, 10], 8),
        choice("iii-", &[8], 8),
        choice("iv°7", &[11, 12, 13, 14, 15, 16, 17], 8),
    ] },
    FlowNode { bar: 8, choices: &[
        choice("I7", &[1, 2, 3], 9),
        choice("VI7", &[4, 5, 6, 8], 9),
        choice("iii-", &[7], 9),
        choice("vi7", &[9], 9),
        choice("IV7", &[10], 9),
        choice("I7/Imaj", &[11, 12, 13, 14, 15, 16, 17], 9),
    ] },
    FlowNode { bar: 9, choices: &[
        choice("V7", &[1, 2], 10),
        choice("II7", &[3, 4], 10),
        choice("ii-7", &[5, 7, 8, 9], 10),
        choice("♭VI7", &[6], 10),
        choice("iv°7", &[10, 11, 12, 13, 14, 15, 16, 17], 10),
    ] },
    FlowNode { bar: 10, choices: &[
        choice("V7", &[1, 3, 4, 5, 6, 7, 8, 9], 11),
        choice("IV7", &[2, 10], 11),
        choice("I7", &[11, 12, 13, 14, 15, 16, 17], 11),
    ] },
    FlowNode { bar: 11, choices: &[
        choice("I7", &[1, 3, 4], 12),
        choice("iii-", &[7, 8], 12),
        choice("vi7", &[9], 12),
        choice("IV7", &[10], 12),
        choice("Imaj", &[11, 12, 13, 14, 15, 16, 17], 12),
    ] },
    FlowNode { bar: 12, choices: &[
        choice("I7", &[1, 9], 1),
        choice("V7", &[2, 3, 4], 1),
        choice("ii- V7", &[5, 7, 8], 1),
        choice("♭VI7 V7", &[6], 1),
        choice("iv°7", &[10, 11, 12, 13, 14, 15, 16, 17], 1),
    ] },
];

/// The node for a 1-based bar.
pub fn flow_node(bar: usize) -> Option<&'static FlowNode> {
    FLOWCHART.iter().find(|node| node.bar == bar)
}

/// The choice a variation takes at a 1-based bar, if the chart lists it there.
///
/// ```
/// use blues_flow::flowchart::flow_choice;
///
/// assert_eq!(flow_choice(9, 6).map(|c| c.chord), Some("♭VI7"));
/// assert_eq!(flow_choice(12, 2).map(|c| c.next_bar), Some(1));
/// ```
pub fn flow_choice(bar: usize, variation: u32) -> Option<&'static FlowChoice> {
    flow_node(bar)?
        .choices
        .iter()
        .find(|choice| choice.variations.contains(&variation))
}

/// A variation's path through all twelve bars; `None` where the chart is silent.
pub fn flow_path(variation: u32) -> Vec<Option<&'static str>> {
    FLOWCHART
        .iter()
        .map(|node| flow_choice(node.bar, variation).map(|choice| choice.chord))
        .collect()
}
