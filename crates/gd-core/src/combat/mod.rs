//! Combat-facing statline components
//!
//! Brands, attack types, attack flavours and resistance sets. Nothing here
//! resolves an attack; these are the values a generated statline carries.

mod attack_flavour;
mod attack_type;
mod brand;
mod resist;

pub use attack_flavour::AttackFlavour;
pub use attack_type::{AttackType, UGLY_THING_ATTACKS};
pub use brand::WeaponBrand;
pub use resist::MonsterResists;
