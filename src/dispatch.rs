//! # Sentence Dispatch
//!
//! The compiled-in table that routes a sentence type to its decoder, and the module
//! identifiers used to enable or disable groups of sentences at runtime.

use core::ops::BitOr;

#[cfg(feature = "ais")]
use crate::nmea_content::ais;
#[cfg(feature = "attitude")]
use crate::nmea_content::attitude;
#[cfg(feature = "comm")]
use crate::nmea_content::comm;
#[cfg(feature = "gnss")]
use crate::nmea_content::gnss;
#[cfg(feature = "heading")]
use crate::nmea_content::heading;
#[cfg(feature = "misc")]
use crate::nmea_content::misc;
#[cfg(feature = "navigation")]
use crate::nmea_content::navigation;
#[cfg(feature = "radar")]
use crate::nmea_content::radar;
#[cfg(feature = "safety")]
use crate::nmea_content::safety;
#[cfg(feature = "sensor")]
use crate::nmea_content::sensor;
#[cfg(feature = "system")]
use crate::nmea_content::system;
#[cfg(feature = "waypoint")]
use crate::nmea_content::waypoint;
use crate::{Error, Tokens, nmea_content::ModuleStates};

/// A functional group of sentence types sharing one state structure.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Gnss,
    Ais,
    Navigation,
    Waypoint,
    Heading,
    Sensor,
    Radar,
    Safety,
    Comm,
    System,
    Attitude,
    Misc,
}

impl Module {
    /// Every module, compiled in or not.
    pub const ALL: [Module; 12] = [
        Module::Gnss,
        Module::Ais,
        Module::Navigation,
        Module::Waypoint,
        Module::Heading,
        Module::Sensor,
        Module::Radar,
        Module::Safety,
        Module::Comm,
        Module::System,
        Module::Attitude,
        Module::Misc,
    ];

    pub const fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Whether the decoders of this module were compiled in (its cargo feature is on).
    pub const fn is_compiled(self) -> bool {
        match self {
            Module::Gnss => cfg!(feature = "gnss"),
            Module::Ais => cfg!(feature = "ais"),
            Module::Navigation => cfg!(feature = "navigation"),
            Module::Waypoint => cfg!(feature = "waypoint"),
            Module::Heading => cfg!(feature = "heading"),
            Module::Sensor => cfg!(feature = "sensor"),
            Module::Radar => cfg!(feature = "radar"),
            Module::Safety => cfg!(feature = "safety"),
            Module::Comm => cfg!(feature = "comm"),
            Module::System => cfg!(feature = "system"),
            Module::Attitude => cfg!(feature = "attitude"),
            Module::Misc => cfg!(feature = "misc"),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Module::Gnss => "gnss",
            Module::Ais => "ais",
            Module::Navigation => "navigation",
            Module::Waypoint => "waypoint",
            Module::Heading => "heading",
            Module::Sensor => "sensor",
            Module::Radar => "radar",
            Module::Safety => "safety",
            Module::Comm => "comm",
            Module::System => "system",
            Module::Attitude => "attitude",
            Module::Misc => "misc",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Module`]s.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Module, ModuleSet};
///
/// let set = ModuleSet::EMPTY.with(Module::Gnss) | Module::Heading;
/// assert!(set.contains(Module::Gnss));
/// assert!(!set.contains(Module::Ais));
///
/// let set = ModuleSet::ALL.without(Module::Ais);
/// assert!(!set.contains(Module::Ais));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleSet(u32);

impl ModuleSet {
    pub const EMPTY: ModuleSet = ModuleSet(0);
    pub const ALL: ModuleSet = ModuleSet((1 << Module::ALL.len()) - 1);

    pub const fn contains(self, module: Module) -> bool {
        self.0 & module.bit() != 0
    }

    pub const fn with(self, module: Module) -> Self {
        ModuleSet(self.0 | module.bit())
    }

    pub const fn without(self, module: Module) -> Self {
        ModuleSet(self.0 & !module.bit())
    }

    pub fn insert(&mut self, module: Module) {
        *self = self.with(module);
    }

    pub fn remove(&mut self, module: Module) {
        *self = self.without(module);
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Module> {
        Module::ALL.into_iter().filter(move |&m| self.contains(m))
    }

    /// The raw bit mask, one bit per module in [`Module::ALL`] order.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        ModuleSet::ALL
    }
}

impl From<Module> for ModuleSet {
    fn from(module: Module) -> Self {
        ModuleSet::EMPTY.with(module)
    }
}

impl BitOr for ModuleSet {
    type Output = ModuleSet;

    fn bitor(self, rhs: ModuleSet) -> ModuleSet {
        ModuleSet(self.0 | rhs.0)
    }
}

impl BitOr<Module> for ModuleSet {
    type Output = ModuleSet;

    fn bitor(self, rhs: Module) -> ModuleSet {
        self.with(rhs)
    }
}

impl FromIterator<Module> for ModuleSet {
    fn from_iter<T: IntoIterator<Item = Module>>(iter: T) -> Self {
        iter.into_iter().fold(ModuleSet::EMPTY, ModuleSet::with)
    }
}

/// Decodes the tokens of one sentence into the module states.
pub type Decoder = fn(&mut ModuleStates, &Tokens<'_>) -> Result<(), Error>;

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct DispatchEntry {
    /// Three character sentence type, such as `"GGA"`
    pub sentence_type: &'static str,
    pub decoder: Decoder,
    pub module: Module,
    /// Minimum number of tokens, the sentence identifier included
    pub min_fields: usize,
}

macro_rules! dispatch_table {
    ($($feature:literal: $module:ident {
        $($sentence:literal => $decoder:path, $min_fields:literal;)*
    })*) => {
        /// Every compiled-in sentence type, grouped by module.
        pub static DISPATCH_TABLE: &[DispatchEntry] = &[
            $($(
                #[cfg(feature = $feature)]
                DispatchEntry {
                    sentence_type: $sentence,
                    decoder: $decoder,
                    module: Module::$module,
                    min_fields: $min_fields,
                },
            )*)*
        ];
    };
}

dispatch_table! {
    "gnss": Gnss {
        "GGA" => gnss::decode_gga, 14;
        "RMC" => gnss::decode_rmc, 10;
        "GLL" => gnss::decode_gll, 7;
        "GSA" => gnss::decode_gsa, 18;
        "GSV" => gnss::decode_gsv, 4;
        "VTG" => gnss::decode_vtg, 9;
        "GNS" => gnss::decode_gns, 13;
        "GST" => gnss::decode_gst, 9;
    }
    "ais": Ais {
        "VDM" => ais::decode_vdm, 7;
        "VDO" => ais::decode_vdo, 7;
    }
    "navigation": Navigation {
        "RMB" => navigation::decode_rmb, 14;
        "XTE" => navigation::decode_xte, 6;
        "BOD" => navigation::decode_bod, 7;
        "BWC" => navigation::decode_bwc, 13;
    }
    "waypoint": Waypoint {
        "WPL" => waypoint::decode_wpl, 6;
        "RTE" => waypoint::decode_rte, 5;
    }
    "heading": Heading {
        "HDG" => heading::decode_hdg, 6;
        "HDT" => heading::decode_hdt, 3;
        "HDM" => heading::decode_hdm, 3;
        "ROT" => heading::decode_rot, 3;
        "THS" => heading::decode_ths, 3;
        "HTC" => heading::decode_htc, 14;
        "HTD" => heading::decode_htd, 18;
    }
    "sensor": Sensor {
        "DBT" => sensor::decode_dbt, 7;
        "DPT" => sensor::decode_dpt, 3;
        "MTW" => sensor::decode_mtw, 3;
        "MWV" => sensor::decode_mwv, 6;
        "MWD" => sensor::decode_mwd, 9;
        "VHW" => sensor::decode_vhw, 9;
        "XDR" => sensor::decode_xdr, 5;
    }
    "radar": Radar {
        "TTM" => radar::decode_ttm, 15;
        "TLL" => radar::decode_tll, 10;
    }
    "safety": Safety {
        "ALR" => safety::decode_alr, 6;
        "ACK" => safety::decode_ack, 2;
    }
    "comm": Comm {
        "TXT" => comm::decode_txt, 5;
    }
    "system": System {
        "ZDA" => system::decode_zda, 7;
        "HBT" => system::decode_hbt, 4;
    }
    "attitude": Attitude {
        "HRM" => attitude::decode_hrm, 6;
    }
    "misc": Misc {
        "VLW" => misc::decode_vlw, 5;
        "RSA" => misc::decode_rsa, 5;
    }
}

/// Finds the dispatch entry of a sentence type.
///
/// Returns [`None`] for sentence types that are unknown or whose module was not compiled
/// in.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Module, lookup};
///
/// let entry = lookup("GGA").unwrap();
/// assert_eq!(entry.module, Module::Gnss);
/// assert_eq!(entry.min_fields, 14);
///
/// assert!(lookup("XXX").is_none());
/// ```
pub fn lookup(sentence_type: &str) -> Option<&'static DispatchEntry> {
    DISPATCH_TABLE
        .iter()
        .find(|entry| entry.sentence_type == sentence_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_set() {
        let mut set = ModuleSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Module::Gnss);
        set.insert(Module::Misc);
        assert!(set.contains(Module::Gnss));
        assert!(set.contains(Module::Misc));
        assert!(!set.contains(Module::Ais));
        assert_eq!(set.iter().collect::<Vec<_>>(), [Module::Gnss, Module::Misc]);

        set.remove(Module::Gnss);
        assert!(!set.contains(Module::Gnss));

        let set: ModuleSet = [Module::Ais, Module::Radar].into_iter().collect();
        assert_eq!(set, ModuleSet::from(Module::Ais) | Module::Radar);
        assert_eq!(set.bits(), 0b100_0010);
    }

    #[test]
    fn test_module_set_all() {
        assert_eq!(ModuleSet::default(), ModuleSet::ALL);
        assert_eq!(ModuleSet::ALL.iter().count(), Module::ALL.len());
        assert_eq!(ModuleSet::ALL.bits(), 0xFFF);

        for module in Module::ALL {
            assert!(ModuleSet::ALL.contains(module));
            assert!(!ModuleSet::ALL.without(module).contains(module));
        }
    }

    #[test]
    fn test_table_is_unique() {
        for (i, entry) in DISPATCH_TABLE.iter().enumerate() {
            assert_eq!(entry.sentence_type.len(), 3, "{}", entry.sentence_type);
            assert!(entry.min_fields >= 2, "{}", entry.sentence_type);
            assert!(
                DISPATCH_TABLE[i + 1..]
                    .iter()
                    .all(|other| other.sentence_type != entry.sentence_type),
                "duplicate {}",
                entry.sentence_type
            );
        }
    }

    #[test]
    fn test_table_modules_are_compiled() {
        for entry in DISPATCH_TABLE {
            assert!(entry.module.is_compiled(), "{}", entry.sentence_type);
        }
    }

    #[cfg(feature = "heading")]
    #[test]
    fn test_htc_and_htd_are_distinct() {
        let htc = lookup("HTC").unwrap();
        let htd = lookup("HTD").unwrap();

        assert_eq!(htc.min_fields, 14);
        assert_eq!(htd.min_fields, 18);
        assert_ne!(htc.decoder as usize, htd.decoder as usize);
    }

    #[test]
    fn test_lookup() {
        assert!(lookup("").is_none());
        assert!(lookup("gga").is_none());
        assert!(lookup("GGAX").is_none());

        #[cfg(feature = "ais")]
        assert_eq!(lookup("VDM").map(|e| e.module), Some(Module::Ais));
    }
}
