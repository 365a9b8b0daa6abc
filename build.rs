//! Build script for chatgrab - embeds build date and git commit hash
//!
//! Always emits `VERGEN_BUILD_DATE`. Dev builds (no `release` feature) also
//! emit `VERGEN_GIT_SHA` so the version string points at a commit.

use vergen_gitcl::{BuildBuilder, Emitter};

fn main() {
    let build_result = match BuildBuilder::default().build_date(true).build() {
        Ok(build) => Emitter::default()
            .add_instructions(&build)
            .and_then(|emitter| emitter.emit()),
        Err(e) => {
            fallback("VERGEN_BUILD_DATE", &e);
            Ok(())
        }
    };
    if let Err(e) = build_result {
        fallback("VERGEN_BUILD_DATE", &e);
    }

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::GitclBuilder;

    let git_result = match GitclBuilder::default().sha(true).build() {
        Ok(git) => Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit()),
        Err(e) => {
            fallback("VERGEN_GIT_SHA", &e);
            Ok(())
        }
    };
    // Not a git checkout (e.g. a source tarball)
    if let Err(e) = git_result {
        fallback("VERGEN_GIT_SHA", &e);
    }
}

fn fallback(var: &str, error: &dyn std::fmt::Display) {
    println!("cargo:warning=Failed to emit {}: {}", var, error);
    println!("cargo:rustc-env={}=unknown", var);
}
