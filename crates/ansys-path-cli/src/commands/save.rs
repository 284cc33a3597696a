//! Save command - store the executable location of one product

use anyhow::Result;
use ansys_path::{PathResolver, Product};
use ansys_path_core::AnsysPathError;
use colored::Colorize;
use std::path::Path;

/// Execute `save-ansys-path --name <product> [LOCATION]`
pub fn execute_save(name: &str, location: Option<&Path>, allow_prompt: bool) -> Result<()> {
    let product: Product = name.parse()?;
    let mut resolver = PathResolver::from_system()?;
    tracing::debug!(%product, ?location, allow_prompt, "saving executable path");

    match resolver.save_path(product, location, allow_prompt) {
        Ok(saved) => {
            println!(
                "{} Saved {} executable",
                "✓".green().bold(),
                product.display_name()
            );
            println!("  Path: {}", saved.display());
            println!("  Config: {}", resolver.store().path().display());
            Ok(())
        }
        Err(e @ AnsysPathError::ExecutableNotResolved { .. }) => {
            eprintln!(
                "{} No {} executable found in default locations",
                "✗".red().bold(),
                product.display_name()
            );
            eprintln!("\nTo save one, run:");
            eprintln!("  save-ansys-path --name {} /path/to/{}-executable", product, product);
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
