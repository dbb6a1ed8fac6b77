//! Generates Swift, Kotlin or Python bindings from the compiled pixkit-mobile library.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use uniffi_bindgen::bindings::{
    KotlinBindingGenerator, PythonBindingGenerator, SwiftBindingGenerator,
};
use uniffi_bindgen::BindingGenerator;

#[cfg(target_os = "macos")]
const DEFAULT_LIBRARY: &str = "../target/release/libpixkit_mobile.dylib";
#[cfg(not(target_os = "macos"))]
const DEFAULT_LIBRARY: &str = "../target/release/libpixkit_mobile.so";

#[derive(Parser)]
#[command(name = "generate-bindings")]
#[command(about = "Generate UniFFI bindings for pixkit-mobile")]
struct Cli {
    /// Path to the compiled library (.dylib, .so, or .a file)
    #[arg(long, default_value = DEFAULT_LIBRARY)]
    library: Utf8PathBuf,

    /// Output languages; repeat the flag for several
    #[arg(short = 'l', long = "language", default_value = "swift")]
    languages: Vec<Language>,

    /// Output root; each language goes to `<out-dir>/<language>/generated`
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: Utf8PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Language {
    Swift,
    Kotlin,
    Python,
}

impl Language {
    fn dir_name(self) -> &'static str {
        match self {
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Python => "python",
        }
    }
}

fn generate<G: BindingGenerator>(
    generator: &G,
    library: &Utf8Path,
    out_dir: &Utf8Path,
) -> anyhow::Result<()> {
    uniffi_bindgen::library_mode::generate_bindings(
        library,
        None,
        generator,
        &uniffi_bindgen::EmptyCrateConfigSupplier,
        None,
        out_dir,
        false,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.library.exists() {
        anyhow::bail!("Library not found: {}", cli.library);
    }
    println!("Library: {}", cli.library);

    for language in cli.languages {
        let out_dir = cli.out_dir.join(language.dir_name()).join("generated");
        std::fs::create_dir_all(&out_dir)?;
        println!("Generating {} bindings into {}", language.dir_name(), out_dir);

        match language {
            Language::Swift => generate(&SwiftBindingGenerator, &cli.library, &out_dir)?,
            Language::Kotlin => generate(&KotlinBindingGenerator, &cli.library, &out_dir)?,
            Language::Python => generate(&PythonBindingGenerator, &cli.library, &out_dir)?,
        }
    }

    println!("Bindings generated");
    Ok(())
}
