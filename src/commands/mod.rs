pub mod export;
pub mod generate;
pub mod show;

use anyhow::Result;
use postplan_core::post::{Platform, Tone};

/// Resolve a platform name case-insensitively, or bail listing the options.
pub fn resolve_platform(name: &str) -> Result<Platform> {
    Platform::ALL
        .into_iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let available: Vec<_> = Platform::ALL.iter().map(|p| p.as_str()).collect();
            anyhow::anyhow!(
                "Platform '{}' not recognized. Available: {}",
                name,
                available.join(", ")
            )
        })
}

/// Resolve a tone name ("light-humor" is accepted for "Light humor").
pub fn resolve_tone(name: &str) -> Result<Tone> {
    let normalized = name.replace('-', " ");
    Tone::ALL
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| {
            let available: Vec<_> = Tone::ALL.iter().map(|t| t.as_str()).collect();
            anyhow::anyhow!(
                "Tone '{}' not recognized. Available: {}",
                name,
                available.join(", ")
            )
        })
}

/// Resolve a platform list, dropping duplicates while keeping first-seen order.
pub fn resolve_platforms(names: &[String]) -> Result<Vec<Platform>> {
    let mut platforms = Vec::new();
    for name in names {
        let platform = resolve_platform(name)?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }
    Ok(platforms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_resolution_is_case_insensitive() {
        assert_eq!(resolve_platform("vk").unwrap(), Platform::Vk);
        assert_eq!(resolve_platform("TELEGRAM").unwrap(), Platform::Telegram);
        assert!(resolve_platform("Twitter").is_err());
    }

    #[test]
    fn tone_resolution_accepts_hyphen() {
        assert_eq!(resolve_tone("light-humor").unwrap(), Tone::LightHumor);
        assert_eq!(resolve_tone("expert").unwrap(), Tone::Expert);
        assert!(resolve_tone("sarcastic").is_err());
    }

    #[test]
    fn platform_lists_are_deduplicated() {
        let names = vec!["VK".to_string(), "vk".to_string(), "Telegram".to_string()];
        let platforms = resolve_platforms(&names).unwrap();
        assert_eq!(platforms, vec![Platform::Vk, Platform::Telegram]);
    }
}
