//! Defaults offered by the profile prompts

use serde::Deserialize;

/// Default answers for `xa create profile`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileDefaults {
    /// Suggested user name
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Suggested form of address
    #[serde(default = "default_address_as")]
    pub address_as: String,

    /// Suggested assistant name
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Suggested action server port
    #[serde(default = "default_action_server_port")]
    pub action_server_port: u16,

    /// Suggested socket server port
    #[serde(default = "default_socket_port")]
    pub socket_port: u16,
}

fn default_user_name() -> String {
    "John Wick".to_string()
}

fn default_address_as() -> String {
    "John".to_string()
}

fn default_assistant_name() -> String {
    "Charlotte".to_string()
}

const fn default_action_server_port() -> u16 {
    6969
}

const fn default_socket_port() -> u16 {
    1414
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            address_as: default_address_as(),
            assistant_name: default_assistant_name(),
            action_server_port: default_action_server_port(),
            socket_port: default_socket_port(),
        }
    }
}
