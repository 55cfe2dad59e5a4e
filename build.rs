// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Generate a C header for double_slit and write it to the include
    // directory. This routine only need to be done if the ffi module has
    // changed.
    println!("cargo:rerun-if-changed=src/ffi/mod.rs");
    // Only do this if we're not on docs.rs (doesn't like writing files outside
    // of OUT_DIR), and not when building for wasm, where hosts call the module
    // exports directly.
    let docs_rs = matches!(env::var("DOCS_RS").as_deref(), Ok("1"));
    let wasm = matches!(env::var("CARGO_CFG_TARGET_ARCH").as_deref(), Ok("wasm32"));
    if docs_rs || wasm {
        return;
    }

    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    cbindgen::Builder::new()
        .with_config({
            let mut config = cbindgen::Config::default();
            config.cpp_compat = true;
            config.pragma_once = true;
            config
        })
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .generate()
        .expect("Unable to generate bindings")
        .write_to_file("include/double_slit.h");
}
