fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/php_service.proto");

    // Set empty build version (git hash not available in Docker builds)
    println!("cargo:rustc-env=BUILD_VERSION=");

    // Bindings are checked in under src/grpc/generated; only regenerate on request
    #[cfg(feature = "codegen")]
    regenerate_bindings();
}

#[cfg(feature = "codegen")]
fn regenerate_bindings() {
    if let Err(e) = tonic_build::configure()
        .build_server(false)
        .out_dir("src/grpc/generated")
        .compile_protos(&["proto/php_service.proto"], &["proto"])
    {
        panic!("build.rs: failed to compile proto/php_service.proto: {}", e);
    }
}
