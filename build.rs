fn main() {
    // UniFFI scaffolding comes from uniffi::setup_scaffolding!() in uniffi_bindings.rs
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    // The bundled catalog is compiled in with include_str!
    println!("cargo:rerun-if-changed=data/recipes.json");
    println!("cargo:rerun-if-changed=build.rs");
}
