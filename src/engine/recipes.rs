//! # engine::recipes
//!
//! Static recipe tables for the skill-profit routes.  Item ids are OSRS
//! item ids as used by the wiki price API.  `actions_per_hr` are rough
//! efficient-method estimates; the `notes` say which method.

use crate::engine::skill::{Material, Recipe};

const fn m(id: u32, qty: u32) -> Material {
    Material { id, qty }
}

// ─── Smithing ─────────────────────────────────────────────────────────────────

const COAL: u32 = 453;

pub const SMITHING: &[Recipe] = &[
    Recipe {
        name: "Bronze bar",
        product_id: 2349,
        output_qty: 1,
        materials: &[m(436, 1), m(438, 1)],
        actions_per_hr: 1_300,
        notes: "Edgeville furnace",
    },
    Recipe {
        name: "Steel bar",
        product_id: 2353,
        output_qty: 1,
        materials: &[m(440, 1), m(COAL, 2)],
        actions_per_hr: 5_000,
        notes: "Blast Furnace (halved coal not assumed)",
    },
    Recipe {
        name: "Gold bar",
        product_id: 2357,
        output_qty: 1,
        materials: &[m(444, 1)],
        actions_per_hr: 5_000,
        notes: "Blast Furnace with goldsmith gauntlets",
    },
    Recipe {
        name: "Silver bar",
        product_id: 2355,
        output_qty: 1,
        materials: &[m(442, 1)],
        actions_per_hr: 5_000,
        notes: "Blast Furnace",
    },
    Recipe {
        name: "Mithril bar",
        product_id: 2359,
        output_qty: 1,
        materials: &[m(447, 1), m(COAL, 4)],
        actions_per_hr: 4_500,
        notes: "Blast Furnace",
    },
    Recipe {
        name: "Adamantite bar",
        product_id: 2361,
        output_qty: 1,
        materials: &[m(449, 1), m(COAL, 6)],
        actions_per_hr: 4_000,
        notes: "Blast Furnace",
    },
    Recipe {
        name: "Runite bar",
        product_id: 2363,
        output_qty: 1,
        materials: &[m(451, 1), m(COAL, 8)],
        actions_per_hr: 3_500,
        notes: "Blast Furnace",
    },
    Recipe {
        name: "Cannonball",
        product_id: 2,
        output_qty: 4,
        materials: &[m(2353, 1)],
        actions_per_hr: 1_250,
        notes: "Per steel bar, double ammo mould",
    },
];

// ─── Fletching ────────────────────────────────────────────────────────────────

const BOW_STRING: u32 = 1777;

pub const FLETCHING: &[Recipe] = &[
    Recipe {
        name: "Maple longbow (u)",
        product_id: 62,
        output_qty: 1,
        materials: &[m(1517, 1)],
        actions_per_hr: 1_700,
        notes: "Knife on maple logs",
    },
    Recipe {
        name: "Yew longbow (u)",
        product_id: 66,
        output_qty: 1,
        materials: &[m(1515, 1)],
        actions_per_hr: 1_700,
        notes: "Knife on yew logs",
    },
    Recipe {
        name: "Magic longbow (u)",
        product_id: 70,
        output_qty: 1,
        materials: &[m(1513, 1)],
        actions_per_hr: 1_700,
        notes: "Knife on magic logs",
    },
    Recipe {
        name: "Maple longbow",
        product_id: 851,
        output_qty: 1,
        materials: &[m(62, 1), m(BOW_STRING, 1)],
        actions_per_hr: 2_500,
        notes: "Stringing, 14/14",
    },
    Recipe {
        name: "Yew longbow",
        product_id: 855,
        output_qty: 1,
        materials: &[m(66, 1), m(BOW_STRING, 1)],
        actions_per_hr: 2_500,
        notes: "Stringing, 14/14",
    },
    Recipe {
        name: "Magic longbow",
        product_id: 859,
        output_qty: 1,
        materials: &[m(70, 1), m(BOW_STRING, 1)],
        actions_per_hr: 2_500,
        notes: "Stringing, 14/14",
    },
    Recipe {
        name: "Rune arrow",
        product_id: 892,
        output_qty: 15,
        materials: &[m(44, 15), m(53, 15)],
        actions_per_hr: 1_000,
        notes: "15 arrows per action",
    },
];

// ─── Runecrafting ─────────────────────────────────────────────────────────────

const ONE_PURE_ESSENCE: &[Material] = &[m(7936, 1)];

const fn rune(name: &'static str, product_id: u32, actions_per_hr: i64) -> Recipe {
    Recipe {
        name,
        product_id,
        output_qty: 1,
        materials: ONE_PURE_ESSENCE,
        actions_per_hr,
        notes: "Per essence; pouches + Abyss, no multiples",
    }
}

pub const RUNECRAFTING: &[Recipe] = &[
    rune("Air rune", 556, 2_000),
    rune("Mind rune", 558, 2_000),
    rune("Water rune", 555, 2_000),
    rune("Earth rune", 557, 2_000),
    rune("Fire rune", 554, 2_000),
    rune("Body rune", 559, 2_000),
    rune("Cosmic rune", 564, 2_000),
    rune("Chaos rune", 562, 2_300),
    rune("Astral rune", 9075, 1_800),
    rune("Nature rune", 561, 2_200),
    rune("Law rune", 563, 1_700),
    rune("Death rune", 560, 2_000),
    rune("Blood rune", 565, 1_900),
    rune("Soul rune", 566, 1_100),
    rune("Wrath rune", 21880, 1_600),
];

// ─── Cooking ──────────────────────────────────────────────────────────────────

pub const COOKING: &[Recipe] = &[
    Recipe {
        name: "Lobster",
        product_id: 379,
        output_qty: 1,
        materials: &[m(377, 1)],
        actions_per_hr: 1_400,
        notes: "Assumes no burns",
    },
    Recipe {
        name: "Swordfish",
        product_id: 373,
        output_qty: 1,
        materials: &[m(371, 1)],
        actions_per_hr: 1_400,
        notes: "Assumes no burns",
    },
    Recipe {
        name: "Monkfish",
        product_id: 7946,
        output_qty: 1,
        materials: &[m(7944, 1)],
        actions_per_hr: 1_400,
        notes: "Assumes no burns",
    },
    Recipe {
        name: "Cooked karambwan",
        product_id: 3144,
        output_qty: 1,
        materials: &[m(3142, 1)],
        actions_per_hr: 4_000,
        notes: "1-tick cooking",
    },
    Recipe {
        name: "Shark",
        product_id: 385,
        output_qty: 1,
        materials: &[m(383, 1)],
        actions_per_hr: 1_400,
        notes: "Assumes no burns",
    },
    Recipe {
        name: "Anglerfish",
        product_id: 13441,
        output_qty: 1,
        materials: &[m(13439, 1)],
        actions_per_hr: 1_400,
        notes: "Assumes no burns",
    },
    Recipe {
        name: "Manta ray",
        product_id: 391,
        output_qty: 1,
        materials: &[m(389, 1)],
        actions_per_hr: 1_400,
        notes: "Assumes no burns",
    },
];

// ─── Crafting ─────────────────────────────────────────────────────────────────

pub const CRAFTING: &[Recipe] = &[
    Recipe {
        name: "Green d'hide body",
        product_id: 1135,
        output_qty: 1,
        materials: &[m(1745, 3)],
        actions_per_hr: 1_700,
        notes: "Thread and needle not counted",
    },
    Recipe {
        name: "Blue d'hide body",
        product_id: 2499,
        output_qty: 1,
        materials: &[m(2505, 3)],
        actions_per_hr: 1_700,
        notes: "Thread and needle not counted",
    },
    Recipe {
        name: "Red d'hide body",
        product_id: 2501,
        output_qty: 1,
        materials: &[m(2507, 3)],
        actions_per_hr: 1_700,
        notes: "Thread and needle not counted",
    },
    Recipe {
        name: "Black d'hide body",
        product_id: 2503,
        output_qty: 1,
        materials: &[m(2509, 3)],
        actions_per_hr: 1_700,
        notes: "Thread and needle not counted",
    },
    Recipe {
        name: "Molten glass",
        product_id: 1775,
        output_qty: 1,
        materials: &[m(1783, 1), m(1781, 1)],
        actions_per_hr: 1_500,
        notes: "Furnace",
    },
    Recipe {
        name: "Unpowered orb",
        product_id: 567,
        output_qty: 1,
        materials: &[m(1775, 1)],
        actions_per_hr: 1_300,
        notes: "Glassblowing pipe",
    },
    Recipe {
        name: "Ruby",
        product_id: 1603,
        output_qty: 1,
        materials: &[m(1619, 1)],
        actions_per_hr: 2_700,
        notes: "Chisel",
    },
    Recipe {
        name: "Diamond",
        product_id: 1601,
        output_qty: 1,
        materials: &[m(1617, 1)],
        actions_per_hr: 2_700,
        notes: "Chisel",
    },
    Recipe {
        name: "Dragonstone",
        product_id: 1615,
        output_qty: 1,
        materials: &[m(1631, 1)],
        actions_per_hr: 2_700,
        notes: "Chisel",
    },
];
