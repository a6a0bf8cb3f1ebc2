// Equipment
pub const MAX_EQUIPPED_WEAPONS: usize = 3;

// Weapon upgrades
pub const FIRE_RATE_UPGRADE_FACTOR: f64 = 0.9; // 10% shorter interval per upgrade

// Card distribution
pub const DEFAULT_CARDS_PER_LEVEL: usize = 3;
pub const LARGE_HAND_THRESHOLD: usize = 4;
pub const SMALL_HAND_STAT_GUARANTEE: usize = 1;
pub const LARGE_HAND_STAT_GUARANTEE: usize = 2;

// Stat bonuses
pub const STAT_UNLOCK_LEVEL: u32 = 1;
pub const ADDITIVE_BONUS_PER_LEVEL: f64 = 1.0;
pub const MULTIPLIER_BONUS_PER_LEVEL: f64 = 0.5;
pub const FIRE_RATE_REDUCTION_PER_LEVEL: f64 = 0.33;
pub const FIRE_RATE_REDUCTION_CAP: f64 = 0.8;
pub const DEFAULT_STAT_VALUE_PER_LEVEL: f64 = 0.1;

// Weapon definition defaults
pub const DEFAULT_WEAPON_DAMAGE: u32 = 1;
pub const DEFAULT_WEAPON_FIRE_RATE: f64 = 1.0; // seconds between volleys
pub const DEFAULT_WEAPON_PROJECTILES: u32 = 1;
pub const DEFAULT_WEAPON_SPREAD_ANGLE: f64 = 10.0; // degrees between projectiles
pub const DEFAULT_WEAPON_BULLET_SPEED: f64 = 8.0;
pub const DEFAULT_DAMAGE_PER_UPGRADE: u32 = 1;
pub const DEFAULT_PROJECTILES_PER_UPGRADE: u32 = 1;

// Character defaults
pub const DEFAULT_BASE_SPEED: f64 = 6.0;
pub const DEFAULT_BASE_MAX_HP: u32 = 3;
pub const MAX_ARCANA_NUMBER: u8 = 21;

// XP and leveling
pub const STARTING_LEVEL: u32 = 1;
pub const BASE_XP_TO_NEXT_LEVEL: u32 = 5;
pub const XP_CURVE_MULTIPLIER: f64 = 1.5;
