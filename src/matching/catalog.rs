use crate::types::funding::{Category, FundingProgram};

/// Built-in funder catalog. Keyword tags mirror each program's published
/// focus areas; base percentages reflect how broadly the program accepts
/// applications, with wildcard programs open to any repo.
pub const PROGRAMS: &[FundingProgram] = &[
    FundingProgram {
        name: "GitHub Sponsors",
        category: Category::Platform,
        keywords: &["developer", "tools", "community", "ecosystem"],
        base: 40.0,
        score_coefficient: 0.15,
        wildcard: true,
        url: "https://github.com/sponsors",
    },
    FundingProgram {
        name: "Open Source Collective",
        category: Category::Nonprofit,
        keywords: &["community", "fiscal", "transparent", "collective"],
        base: 38.0,
        score_coefficient: 0.12,
        wildcard: true,
        url: "https://opencollective.com/opensource",
    },
    FundingProgram {
        name: "NLnet Foundation",
        category: Category::Foundation,
        keywords: &["privacy", "security", "decentralization", "protocol", "standards", "internet"],
        base: 30.0,
        score_coefficient: 0.10,
        wildcard: false,
        url: "https://nlnet.nl",
    },
    FundingProgram {
        name: "Mozilla MOSS",
        category: Category::Foundation,
        keywords: &["web", "privacy", "security", "browser", "standards"],
        base: 28.0,
        score_coefficient: 0.10,
        wildcard: false,
        url: "https://www.mozilla.org/moss",
    },
    FundingProgram {
        name: "Sovereign Tech Fund",
        category: Category::Government,
        keywords: &["infrastructure", "maintenance", "security", "sustainability", "critical"],
        base: 26.0,
        score_coefficient: 0.08,
        wildcard: false,
        url: "https://www.sovereigntechfund.de",
    },
    FundingProgram {
        name: "Linux Foundation",
        category: Category::Foundation,
        keywords: &["linux", "infrastructure", "cloud", "enterprise", "kernel"],
        base: 25.0,
        score_coefficient: 0.10,
        wildcard: false,
        url: "https://www.linuxfoundation.org",
    },
    FundingProgram {
        name: "Apache Software Foundation",
        category: Category::Foundation,
        keywords: &["apache", "java", "data", "server", "community"],
        base: 24.0,
        score_coefficient: 0.08,
        wildcard: false,
        url: "https://www.apache.org",
    },
    FundingProgram {
        name: "NSF POSE",
        category: Category::Government,
        keywords: &["science", "research", "academic", "data", "simulation"],
        base: 22.0,
        score_coefficient: 0.08,
        wildcard: false,
        url: "https://www.nsf.gov/pose",
    },
    FundingProgram {
        name: "Google Summer of Code",
        category: Category::Corporate,
        keywords: &["mentorship", "student", "community", "onboarding"],
        base: 35.0,
        score_coefficient: 0.10,
        wildcard: true,
        url: "https://summerofcode.withgoogle.com",
    },
    FundingProgram {
        name: "Gitcoin Grants",
        category: Category::Crypto,
        keywords: &["web3", "ethereum", "blockchain", "crypto", "defi"],
        base: 30.0,
        score_coefficient: 0.12,
        wildcard: false,
        url: "https://gitcoin.co/grants",
    },
    FundingProgram {
        name: "Ethereum Foundation",
        category: Category::Crypto,
        keywords: &["ethereum", "blockchain", "cryptography", "zero-knowledge", "smart-contracts"],
        base: 26.0,
        score_coefficient: 0.10,
        wildcard: false,
        url: "https://esp.ethereum.foundation",
    },
    FundingProgram {
        name: "Prototype Fund",
        category: Category::Government,
        keywords: &["civic", "prototype", "public", "privacy", "data"],
        base: 24.0,
        score_coefficient: 0.08,
        wildcard: false,
        url: "https://prototypefund.de",
    },
    FundingProgram {
        name: "CNCF",
        category: Category::Foundation,
        keywords: &["cloud", "kubernetes", "container", "observability", "devops"],
        base: 25.0,
        score_coefficient: 0.10,
        wildcard: false,
        url: "https://www.cncf.io",
    },
    FundingProgram {
        name: "Open Technology Fund",
        category: Category::Nonprofit,
        keywords: &["censorship", "privacy", "security", "freedom", "circumvention"],
        base: 24.0,
        score_coefficient: 0.08,
        wildcard: false,
        url: "https://www.opentech.fund",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fourteen_programs() {
        assert_eq!(PROGRAMS.len(), 14);
    }

    #[test]
    fn coefficients_stay_in_range() {
        for program in PROGRAMS {
            assert!(
                (0.08..=0.15).contains(&program.score_coefficient),
                "{} coefficient out of range",
                program.name
            );
        }
    }

    #[test]
    fn wildcard_tier_covers_broad_programs() {
        let wildcards: Vec<_> = PROGRAMS.iter().filter(|p| p.wildcard).collect();
        assert!(wildcards.iter().any(|p| p.name == "GitHub Sponsors"));
        assert!(wildcards.iter().any(|p| p.name == "Open Source Collective"));
    }
}
