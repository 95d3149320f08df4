//! Object identifiers of the MIBs the checks read
//!
//! Identifiers are kept as text and parsed where they are used, the tables
//! are plain constants.

use crate::snmp::Oid;

/// Parse one of the constants below
pub fn oid(text: &str) -> Oid {
    let parsed = text.parse();
    debug_assert!(parsed.is_ok(), "malformed builtin oid {}", text);
    parsed.unwrap_or_default()
}

pub fn oids(texts: &[&str]) -> Vec<Oid> {
    texts.iter().map(|t| oid(t)).collect()
}

/// SNMPv2-MIB sysObjectID.0, used to tell agents apart
pub const SYS_OBJECT_ID: &str = "1.3.6.1.2.1.1.2.0";

/// Enterprise subtree reported as sysObjectID by net-snmp
pub const NET_SNMP_AGENT: &str = "1.3.6.1.4.1.8072";

pub mod smart_snmpd {
    //! The smart-snmpd enterprise subtree

    /// Root of the smart-snmpd MIB, also what its sysObjectID starts with
    pub const ROOT: &str = "1.3.6.1.4.1.36539.20";

    pub const CPU_USER: &str = "1.3.6.1.4.1.36539.20.1.1.0";
    pub const CPU_KERNEL: &str = "1.3.6.1.4.1.36539.20.1.2.0";
    pub const CPU_IDLE: &str = "1.3.6.1.4.1.36539.20.1.3.0";
    pub const CPU_TOTAL: &str = "1.3.6.1.4.1.36539.20.1.4.0";

    pub const LOAD_1: &str = "1.3.6.1.4.1.36539.20.2.1.0";
    pub const LOAD_5: &str = "1.3.6.1.4.1.36539.20.2.2.0";
    pub const LOAD_15: &str = "1.3.6.1.4.1.36539.20.2.3.0";

    pub const MEM_PHYS_FREE: &str = "1.3.6.1.4.1.36539.20.3.1.1.0";
    pub const MEM_PHYS_USED: &str = "1.3.6.1.4.1.36539.20.3.1.2.0";
    pub const MEM_PHYS_CACHED: &str = "1.3.6.1.4.1.36539.20.3.1.3.0";
    pub const MEM_PHYS_TOTAL: &str = "1.3.6.1.4.1.36539.20.3.1.4.0";

    pub const MEM_SWAP_FREE: &str = "1.3.6.1.4.1.36539.20.3.2.1.0";
    pub const MEM_SWAP_USED: &str = "1.3.6.1.4.1.36539.20.3.2.2.0";
    pub const MEM_SWAP_TOTAL: &str = "1.3.6.1.4.1.36539.20.3.2.4.0";

    pub const PROCESS_TOTAL: &str = "1.3.6.1.4.1.36539.20.4.1.0";
    pub const PROCESS_ARGS: &str = "1.3.6.1.4.1.36539.20.4.2.1.3";
    pub const PROCESS_USER: &str = "1.3.6.1.4.1.36539.20.4.2.1.4";
    pub const PROCESS_GROUP: &str = "1.3.6.1.4.1.36539.20.4.2.1.5";
    pub const PROCESS_EFF_USER: &str = "1.3.6.1.4.1.36539.20.4.2.1.6";
    pub const PROCESS_EFF_GROUP: &str = "1.3.6.1.4.1.36539.20.4.2.1.7";

    pub const USER_LOGINS: &str = "1.3.6.1.4.1.36539.20.5.1.0";

    pub const FS_DEVICE: &str = "1.3.6.1.4.1.36539.20.6.1.1.2";
    pub const FS_MOUNTPOINT: &str = "1.3.6.1.4.1.36539.20.6.1.1.3";
    pub const FS_TOTAL: &str = "1.3.6.1.4.1.36539.20.6.1.1.4";
    pub const FS_USED: &str = "1.3.6.1.4.1.36539.20.6.1.1.5";

    pub const APP_LAST_UPDATE: &str = "1.3.6.1.4.1.36539.20.7.1.0";
    pub const APP_AGG_VSZ: &str = "1.3.6.1.4.1.36539.20.7.2.0";
    pub const APP_AGG_RSZ: &str = "1.3.6.1.4.1.36539.20.7.3.0";
    pub const APP_CUR_VSZ: &str = "1.3.6.1.4.1.36539.20.7.4.0";
    pub const APP_CUR_RSZ: &str = "1.3.6.1.4.1.36539.20.7.5.0";
    pub const APP_VSZ_INCREASES: &str = "1.3.6.1.4.1.36539.20.7.6.0";
    pub const APP_RSZ_INCREASES: &str = "1.3.6.1.4.1.36539.20.7.7.0";
}

pub mod ucd {
    //! UCD-SNMP-MIB, served by net-snmp

    pub const SS_CPU_USER: &str = "1.3.6.1.4.1.2021.11.9.0";
    pub const SS_CPU_SYSTEM: &str = "1.3.6.1.4.1.2021.11.10.0";
    pub const SS_CPU_IDLE: &str = "1.3.6.1.4.1.2021.11.11.0";

    pub const LA_LOAD_INT_1: &str = "1.3.6.1.4.1.2021.10.1.5.1";
    pub const LA_LOAD_INT_5: &str = "1.3.6.1.4.1.2021.10.1.5.2";
    pub const LA_LOAD_INT_15: &str = "1.3.6.1.4.1.2021.10.1.5.3";

    pub const MEM_TOTAL_SWAP: &str = "1.3.6.1.4.1.2021.4.3.0";
    pub const MEM_AVAIL_SWAP: &str = "1.3.6.1.4.1.2021.4.4.0";
    pub const MEM_TOTAL_REAL: &str = "1.3.6.1.4.1.2021.4.5.0";
    pub const MEM_AVAIL_REAL: &str = "1.3.6.1.4.1.2021.4.6.0";
}

pub mod host_resources {
    //! HOST-RESOURCES-MIB

    pub const HR_SYSTEM_NUM_USERS: &str = "1.3.6.1.2.1.25.1.5.0";
    pub const HR_SYSTEM_PROCESSES: &str = "1.3.6.1.2.1.25.1.6.0";

    pub const HR_STORAGE_DESCR: &str = "1.3.6.1.2.1.25.2.3.1.3";
    pub const HR_STORAGE_ALLOCATION_UNITS: &str = "1.3.6.1.2.1.25.2.3.1.4";
    pub const HR_STORAGE_SIZE: &str = "1.3.6.1.2.1.25.2.3.1.5";
    pub const HR_STORAGE_USED: &str = "1.3.6.1.2.1.25.2.3.1.6";
}
