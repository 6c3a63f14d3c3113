//! # categories — Display categories for the catalogue browser
//!
//! OSRS has a single real catalogue category, so every catalogue call uses
//! [`OSRS_SINGLE_CATEGORY_ID`].  The list below is only for display.

pub const OSRS_SINGLE_CATEGORY_ID: u32 = 1;

pub const CATEGORIES: [(u32, &str); 38] = [
    (0,  "Miscellaneous"),
    (1,  "Ammo"),
    (2,  "Arrows"),
    (3,  "Bolts"),
    (4,  "Construction materials"),
    (5,  "Construction products"),
    (6,  "Cooking ingredients"),
    (7,  "Costumes"),
    (8,  "Crafting materials"),
    (9,  "Familiars"),
    (10, "Farming produce"),
    (11, "Fletching materials"),
    (12, "Food and Drink"),
    (13, "Herblore materials"),
    (14, "Hunting equipment"),
    (15, "Hunting Produce"),
    (16, "Jewellery"),
    (17, "Mage armour"),
    (18, "Mage weapons"),
    (19, "Melee armour - low level"),
    (20, "Melee armour - mid level"),
    (21, "Melee armour - high level"),
    (22, "Melee weapons - low level"),
    (23, "Melee weapons - mid level"),
    (24, "Melee weapons - high level"),
    (25, "Mining and Smithing"),
    (26, "Potions"),
    (27, "Prayer armour"),
    (28, "Prayer materials"),
    (29, "Range armour"),
    (30, "Range weapons"),
    (31, "Runecrafting"),
    (32, "Runes, Spells and Teleports"),
    (33, "Seeds"),
    (34, "Summoning scrolls"),
    (35, "Tools and containers"),
    (36, "Woodcutting product"),
    (37, "Pocket items"),
];
