//! The animator capability trait.
//!
//! Hosts implement this over their live animator object. The contract
//! mirrors a Unity-style parameter table: lookup by name, typed reads and
//! writes, and one-shot trigger firing. Reads of an absent or differently
//! typed parameter return the kind's zero value; writes to an absent
//! parameter are ignored. The core only reads/writes through descriptors it
//! resolved via `find_parameter`, so hosts may treat mismatches as
//! unreachable.

use crate::params::ParamDescriptor;

pub trait Animator {
    /// Look up a parameter by name, or `None` if the table has no entry.
    fn find_parameter(&self, name: &str) -> Option<ParamDescriptor>;

    fn read_float(&self, name: &str) -> f32;
    fn read_int(&self, name: &str) -> i32;
    fn read_bool(&self, name: &str) -> bool;

    fn write_float(&mut self, name: &str, value: f32);
    fn write_int(&mut self, name: &str, value: i32);
    fn write_bool(&mut self, name: &str, value: bool);

    /// Fire a trigger parameter. Triggers have no readable value.
    fn fire_trigger(&mut self, name: &str);
}
