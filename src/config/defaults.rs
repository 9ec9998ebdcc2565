use crate::config::value::Value;

/// Options of one section in a default table
pub type SectionDefaults<'a> = (&'a str, &'a [(&'a str, Value)]);

/// Default table: section name -> option name -> value
pub type DefaultTable<'a> = [SectionDefaults<'a>];

/// Settings file read when no other path is configured
pub const DEFAULT_CONFIG_FILE: &str = "/etc/hayrack/hayrack.conf";

/// Environment variable that replaces [`DEFAULT_CONFIG_FILE`]
pub const CONFIG_FILE_ENV: &str = "HAYRACK_CONFIG";

/// Compiled-in defaults
pub const DEFAULTS: &DefaultTable<'static> = &[
    (
        "core",
        &[
            ("zmq_bind_host", Value::str("0.0.0.0")),
            ("zmq_bind_port", Value::str("5000")),
            ("zmq_hwm", Value::Integer(0)),
            ("zmq_linger", Value::Integer(-1)),
        ],
    ),
    (
        "logging",
        &[
            ("console", Value::Bool(true)),
            ("logfile", Value::Null),
            ("verbosity", Value::str("DEBUG")),
        ],
    ),
];
