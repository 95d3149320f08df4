//! Command line options describing how to reach the agent

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use structopt::StructOpt;

use crate::error::OptionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnmpVersion {
    V1,
    V2c,
    V3,
}

impl FromStr for SnmpVersion {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<SnmpVersion, OptionError> {
        match s {
            "1" => Ok(SnmpVersion::V1),
            "2c" | "2C" => Ok(SnmpVersion::V2c),
            "3" => Ok(SnmpVersion::V3),
            _ => Err(OptionError::InvalidValue {
                option: "snmp-version",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SnmpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let version = match *self {
            SnmpVersion::V1 => "1",
            SnmpVersion::V2c => "2c",
            SnmpVersion::V3 => "3",
        };
        write!(f, "{}", version)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthProtocol {
    None,
    Md5,
    Sha,
}

impl FromStr for AuthProtocol {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<AuthProtocol, OptionError> {
        match s {
            "none" => Ok(AuthProtocol::None),
            "md5" => Ok(AuthProtocol::Md5),
            "sha" => Ok(AuthProtocol::Sha),
            _ => Err(OptionError::InvalidValue {
                option: "auth-protocol",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AuthProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            AuthProtocol::None => "none",
            AuthProtocol::Md5 => "md5",
            AuthProtocol::Sha => "sha",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivProtocol {
    None,
    Des,
    TripleDes,
    Idea,
    Aes128,
    Aes192,
    Aes256,
}

impl FromStr for PrivProtocol {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<PrivProtocol, OptionError> {
        match s {
            "none" => Ok(PrivProtocol::None),
            "des" => Ok(PrivProtocol::Des),
            "3des" => Ok(PrivProtocol::TripleDes),
            "idea" => Ok(PrivProtocol::Idea),
            "aes128" => Ok(PrivProtocol::Aes128),
            "aes192" => Ok(PrivProtocol::Aes192),
            "aes256" => Ok(PrivProtocol::Aes256),
            _ => Err(OptionError::InvalidValue {
                option: "priv-protocol",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrivProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            PrivProtocol::None => "none",
            PrivProtocol::Des => "des",
            PrivProtocol::TripleDes => "3des",
            PrivProtocol::Idea => "idea",
            PrivProtocol::Aes128 => "aes128",
            PrivProtocol::Aes192 => "aes192",
            PrivProtocol::Aes256 => "aes256",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityLevel {
    NoAuthNoPriv,
    AuthNoPriv,
    AuthPriv,
}

impl FromStr for SecurityLevel {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<SecurityLevel, OptionError> {
        match s {
            "noauth" | "noauth,nopriv" | "none" => Ok(SecurityLevel::NoAuthNoPriv),
            "auth" | "auth,nopriv" | "nopriv" => Ok(SecurityLevel::AuthNoPriv),
            "auth,priv" | "full" => Ok(SecurityLevel::AuthPriv),
            _ => Err(OptionError::InvalidValue {
                option: "security-level",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            SecurityLevel::NoAuthNoPriv => "noauth,nopriv",
            SecurityLevel::AuthNoPriv => "auth,nopriv",
            SecurityLevel::AuthPriv => "auth,priv",
        };
        write!(f, "{}", name)
    }
}

/// General SNMP options plus the v1/v2c community and the v3 user settings
#[derive(Clone, Debug, StructOpt)]
pub struct SnmpOptions {
    #[structopt(
        short = "H",
        long = "host",
        default_value = "127.0.0.1",
        help = "host name (or ip address) of the server to use"
    )]
    pub host: String,
    #[structopt(short = "p", long = "port", default_value = "161", help = "port to connect")]
    pub port: u16,
    #[structopt(
        short = "V",
        long = "snmp-version",
        default_value = "1",
        possible_values = &["1", "2c", "2C", "3"],
        help = "snmp protocol version"
    )]
    pub snmp_version: SnmpVersion,
    #[structopt(short = "t", long = "timeout", default_value = "5", help = "timeout in seconds")]
    pub timeout: u64,
    #[structopt(short = "r", long = "retries", default_value = "2", help = "amount of retries")]
    pub retries: u32,

    #[structopt(short = "C", long = "community", help = "snmp community (SNMPv1/v2c)")]
    pub community: Option<String>,

    #[structopt(long = "auth-password", help = "authentication password (SNMPv3)")]
    pub auth_password: Option<String>,
    #[structopt(long = "priv-password", help = "private password (SNMPv3)")]
    pub priv_password: Option<String>,
    #[structopt(
        long = "auth-protocol",
        default_value = "none",
        possible_values = &["none", "md5", "sha"],
        help = "authentication protocol (SNMPv3)"
    )]
    pub auth_protocol: AuthProtocol,
    #[structopt(
        long = "priv-protocol",
        default_value = "none",
        possible_values = &["none", "des", "3des", "idea", "aes128", "aes192", "aes256"],
        help = "private protocol (SNMPv3)"
    )]
    pub priv_protocol: PrivProtocol,
    #[structopt(long = "security-name", help = "security name (SNMPv3)")]
    pub security_name: Option<String>,
    #[structopt(
        long = "security-level",
        help = "security level (SNMPv3): noauth,nopriv | auth,nopriv | auth,priv"
    )]
    pub security_level: Option<SecurityLevel>,
    #[structopt(long = "context-name", help = "context name (SNMPv3)")]
    pub context_name: Option<String>,
}

impl Default for SnmpOptions {
    fn default() -> SnmpOptions {
        SnmpOptions {
            host: "127.0.0.1".to_string(),
            port: 161,
            snmp_version: SnmpVersion::V1,
            timeout: 5,
            retries: 2,
            community: None,
            auth_password: None,
            priv_password: None,
            auth_protocol: AuthProtocol::None,
            priv_protocol: PrivProtocol::None,
            security_name: None,
            security_level: None,
            context_name: None,
        }
    }
}

fn must_be_none(option: &str, level: SecurityLevel) -> OptionError {
    OptionError::Invalid(format!(
        "Option '{}' must not be used with a different value than 'none' when \
         'security-level' is set to '{}'",
        option, level
    ))
}

fn must_not_be_none(option: &str, level: SecurityLevel) -> OptionError {
    OptionError::Invalid(format!(
        "Option '{}' must not be used with a value of 'none' when 'security-level' \
         is set to '{}'",
        option, level
    ))
}

impl SnmpOptions {
    pub fn validate(&self) -> Result<(), OptionError> {
        if self.snmp_version <= SnmpVersion::V2c {
            if self.community.is_none() {
                return Err(OptionError::Invalid(format!(
                    "SNMPv{} requires option 'community'.",
                    self.snmp_version
                )));
            }
            return Ok(());
        }

        let level = match self.security_level {
            Some(level) => level,
            None => {
                return Err(OptionError::Invalid(
                    "SNMPv3 requires option 'security-level'.".to_string(),
                ))
            }
        };
        let auth = self.auth_protocol != AuthProtocol::None;
        let privacy = self.priv_protocol != PrivProtocol::None;
        match level {
            SecurityLevel::NoAuthNoPriv if auth => return Err(must_be_none("auth-protocol", level)),
            SecurityLevel::NoAuthNoPriv if privacy => {
                return Err(must_be_none("priv-protocol", level))
            }
            SecurityLevel::AuthNoPriv if !auth => {
                return Err(must_not_be_none("auth-protocol", level))
            }
            SecurityLevel::AuthNoPriv if privacy => return Err(must_be_none("priv-protocol", level)),
            SecurityLevel::AuthPriv if !auth => return Err(must_not_be_none("auth-protocol", level)),
            SecurityLevel::AuthPriv if !privacy => {
                return Err(must_not_be_none("priv-protocol", level))
            }
            _ => {}
        }

        if auth && self.auth_password.is_none() {
            return Err(OptionError::Invalid(format!(
                "Option 'auth-protocol' with the value '{}' requires the option 'auth-password'",
                self.auth_protocol
            )));
        }
        if privacy && self.priv_password.is_none() {
            return Err(OptionError::Invalid(format!(
                "Option 'priv-protocol' with the value '{}' requires the option 'priv-password'",
                self.priv_protocol
            )));
        }
        if self.security_name.is_none() {
            return Err(OptionError::Dependency("snmp-version", "security-name"));
        }
        Ok(())
    }

    pub fn target(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
