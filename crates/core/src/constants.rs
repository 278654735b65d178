/// Constants shared across the poolprof crates

// Key rules
pub const MAX_KEY_LENGTH: usize = 1024;
pub const RESERVED_KEY_CHARACTERS: &str = "{}()/\\@:";

// Environment variable names
pub const POOLPROF_POOL_NAME_VAR: &str = "POOLPROF_POOL_NAME";
pub const POOLPROF_TRACE_OPERATIONS_VAR: &str = "POOLPROF_TRACE_OPERATIONS";
pub const POOLPROF_MEMORY_CAPACITY_VAR: &str = "POOLPROF_MEMORY_CAPACITY";

// Defaults
pub const DEFAULT_POOL_NAME: &str = "default";
