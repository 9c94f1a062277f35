const SITE_ENV: [&str; 6] = [
    "PORTFOLIO_OWNER",
    "PORTFOLIO_TAGLINE",
    "PORTFOLIO_LINKEDIN_URL",
    "PORTFOLIO_GITHUB_URL",
    "PORTFOLIO_EMAIL",
    "PORTFOLIO_BOOKING_URL",
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Site settings are baked in with option_env!, so the server binary and the
    // wasm bundle must be rebuilt together whenever one of them changes
    for var in SITE_ENV {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
