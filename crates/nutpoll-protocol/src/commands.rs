//! Commands that can be sent to the monitoring daemon.
//!
//! Only the identity-discovery, authentication and variable-query subset is
//! modeled; the wider command set (SET, INSTCMD, ...) is out of scope.

use crate::tokens::quote;

/// A command in the modeled protocol subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// First half of the authentication pair (`USERNAME <user>`).
    Username(String),
    /// Second half of the authentication pair (`PASSWORD <pass>`).
    Password(String),
    /// Enumerate the UPS units registered with the server (`LIST UPS`).
    ListUps,
    /// Bulk-list all variables of one UPS (`LIST VAR "<id>"`).
    ListVar(String),
    /// Fetch a single variable (`GET VAR "<id>" "<name>"`).
    GetVar(String, String),
}

impl Command {
    /// Render the command as a single protocol line.
    ///
    /// The newline terminator is not included; the line channel owns
    /// framing. Identifiers and variable names are quoted because they may
    /// contain spaces; credentials are sent bare, matching the wire
    /// protocol.
    pub fn encode(&self) -> String {
        match self {
            Command::Username(user) => format!("USERNAME {}", user),
            Command::Password(pass) => format!("PASSWORD {}", pass),
            Command::ListUps => "LIST UPS".to_string(),
            Command::ListVar(id) => format!("LIST VAR {}", quote(id)),
            Command::GetVar(id, name) => {
                format!("GET VAR {} {}", quote(id), quote(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_username_password_unquoted() {
        assert_eq!(
            Command::Username("alice".to_string()).encode(),
            "USERNAME alice"
        );
        assert_eq!(
            Command::Password("secret".to_string()).encode(),
            "PASSWORD secret"
        );
    }

    #[test]
    fn test_encode_list_ups() {
        assert_eq!(Command::ListUps.encode(), "LIST UPS");
    }

    #[test]
    fn test_encode_list_var_quotes_identifier() {
        assert_eq!(
            Command::ListVar("my ups".to_string()).encode(),
            "LIST VAR \"my ups\""
        );
    }

    #[test]
    fn test_encode_get_var() {
        let cmd = Command::GetVar("ups1".to_string(), "battery.charge".to_string());
        assert_eq!(cmd.encode(), "GET VAR \"ups1\" \"battery.charge\"");
    }
}
