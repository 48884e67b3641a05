//! Synthetic identity and workplace roster
//!
//! Name pools for randomized identities plus the fixed workplace → manager
//! mapping. Workplace selection hashes the name with SHA-256 so a given name
//! always lands in the same workplace, across processes and platforms.

use rand::seq::SliceRandom;
use rand::Rng;
use sha2::{Digest, Sha256};

pub const SURNAMES: [&str; 20] = [
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권", "황",
    "안", "송", "류", "전",
];

pub const GIVEN_NAMES: [&str; 20] = [
    "지훈", "서준", "민준", "도윤", "예준", "시우", "하준", "주원", "지우", "서현", "서연", "지민",
    "민서", "하은", "다은", "수빈", "소율", "예린", "지원", "수아",
];

/// Workplaces with their single approving manager (1:1)
pub const WORKPLACE_MANAGERS: [(&str, &str); 5] = [
    ("본사", "강전무"),
    ("장항", "김공장장"),
    ("천안", "이센터장"),
    ("대전", "박지점장"),
    ("신탄진", "최소장"),
];

/// Workplace that receives the forced approval backlog
pub const BOTTLENECK_WORKPLACE: &str = "대전";

/// Manager of [`BOTTLENECK_WORKPLACE`]
pub const BOTTLENECK_MANAGER: &str = "박지점장";

/// Draw a full name from independent surname and given-name picks
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let surname = SURNAMES.choose(rng).copied().unwrap_or_default();
    let given = GIVEN_NAMES.choose(rng).copied().unwrap_or_default();
    format!("{}{}", surname, given)
}

/// Workplace selected by the name hash
pub fn workplace_for_name(name: &str) -> &'static str {
    let digest = Sha256::digest(name.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let index = u64::from_be_bytes(prefix) % WORKPLACE_MANAGERS.len() as u64;
    WORKPLACE_MANAGERS[index as usize].0
}

/// The manager responsible for a workplace
pub fn manager_for(workplace: &str) -> Option<&'static str> {
    WORKPLACE_MANAGERS
        .iter()
        .find(|(wp, _)| *wp == workplace)
        .map(|(_, manager)| *manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_workplace_hash_is_stable() {
        let first = workplace_for_name("김지훈");
        for _ in 0..10 {
            assert_eq!(workplace_for_name("김지훈"), first);
        }
    }

    #[test]
    fn test_every_workplace_has_one_manager() {
        for (workplace, manager) in WORKPLACE_MANAGERS {
            assert_eq!(manager_for(workplace), Some(manager));
        }
        assert_eq!(manager_for("부산"), None);
        assert_eq!(manager_for(BOTTLENECK_WORKPLACE), Some(BOTTLENECK_MANAGER));
    }

    #[test]
    fn test_hash_spreads_over_workplaces() {
        let mut seen = std::collections::HashSet::new();
        for surname in SURNAMES {
            for given in GIVEN_NAMES {
                seen.insert(workplace_for_name(&format!("{}{}", surname, given)));
            }
        }
        assert_eq!(seen.len(), WORKPLACE_MANAGERS.len());
    }

    #[test]
    fn test_random_name_uses_pools() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let name = random_name(&mut rng);
            assert!(SURNAMES.iter().any(|s| name.starts_with(s)));
            assert!(GIVEN_NAMES.iter().any(|g| name.ends_with(g)));
        }
    }
}
