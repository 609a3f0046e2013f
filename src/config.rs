use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "HISTLOG")]
#[allow(non_snake_case)]
pub struct HistlogConfig {
    /// Capacity of the in-memory history queue.
    #[from_env(default = "1000")]
    pub QUEUE_CAPACITY: usize,
}

pub static HISTLOG_CONFIG: LazyLock<HistlogConfig> =
    LazyLock::new(|| HistlogConfig::from_env().unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(HISTLOG_CONFIG.QUEUE_CAPACITY, 1000);
    }
}
