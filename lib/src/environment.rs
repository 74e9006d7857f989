use std::env;
use std::str::FromStr;
use tracing::log::warn;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn u16(
        env_name: &str,
        default: u16,
    ) -> u16 {
        Self::parsed(env_name, default)
    }

    pub fn u32(
        env_name: &str,
        default: u32,
    ) -> u32 {
        Self::parsed(env_name, default)
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> u64 {
        Self::parsed(env_name, default)
    }

    fn parsed<T>(
        env_name: &str,
        default: T,
    ) -> T
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        match env::var(env_name) {
            Ok(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
                warn!("Invalid value '{value}' for {env_name}, using default {default}");
                default
            }),
            Err(_) => default,
        }
    }
}
