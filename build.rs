fn main() {
    println!("cargo:rerun-if-env-changed=CONDA_PREFIX");
    // rdkit is usually installed into a conda env, so point the loader at the
    // env's libpython when there is one
    if let Ok(prefix) = std::env::var("CONDA_PREFIX") {
        println!("cargo:rustc-env=LD_LIBRARY_PATH={prefix}/lib");
    }
}
