use rustc_version::{version_meta, Channel};

fn main() {
    println!("cargo::rustc-check-cfg=cfg(CHANNEL_NIGHTLY)");

    // Only nightly builds enable doc_auto_cfg
    if let Ok(meta) = version_meta() {
        if meta.channel == Channel::Nightly {
            println!("cargo:rustc-cfg=CHANNEL_NIGHTLY");
        }
    }
}
