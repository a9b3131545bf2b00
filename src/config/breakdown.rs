pub struct LanguageTvl {
    pub language: &'static str,
    /// Billions of USD.
    pub tvl: f64,
    pub color: &'static str,
}

/// TVL by smart-contract language, May 2025 snapshot.
pub const LANGUAGE_BREAKDOWN: &[LanguageTvl] = &[
    LanguageTvl { language: "Solidity", tvl: 173.75, color: "#007bff" },
    LanguageTvl { language: "Rust", tvl: 18.13, color: "#ff3d3d" },
    LanguageTvl { language: "Bitcoin Script", tvl: 10.10, color: "#6c963f" },
    LanguageTvl { language: "Vyper", tvl: 3.03, color: "#63c3ff" },
    LanguageTvl { language: "Haskell", tvl: 0.17, color: "#ff69b4" },
    LanguageTvl { language: "C++", tvl: 0.80, color: "#90ee90" },
    LanguageTvl { language: "Cairo", tvl: 0.80, color: "#ffd700" },
    LanguageTvl { language: "Ride", tvl: 0.19, color: "#dda0dd" },
    LanguageTvl { language: "Clarity", tvl: 0.25, color: "#ff1493" },
    LanguageTvl { language: "Java", tvl: 0.23, color: "#66ccff" },
    LanguageTvl { language: "Others", tvl: 0.68, color: "#d3d3d3" },
];
