use quote::{format_ident, quote};

/// Emits one `#[test]` per `.lox` fixture under `bin/tests/fixtures`.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let fixtures_dir = format!("{}/../fixtures", env!("CARGO_MANIFEST_DIR"));
    let tests = walkdir::WalkDir::new(&fixtures_dir)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("lox".as_ref()))
        .map(|entry| {
            let fixture_path = entry.path().to_string_lossy().to_string();
            let name = entry
                .path()
                .strip_prefix(&fixtures_dir)
                .unwrap_or(entry.path())
                .with_extension("")
                .to_string_lossy()
                .replace(['/', '-', '.'], "_");
            let test_ident = format_ident!("fixture_{}", name);
            quote! {
                #[test]
                fn #test_ident() {
                    lox_expect(std::fs::read_to_string(#fixture_path).unwrap().as_str());
                }
            }
        });

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
