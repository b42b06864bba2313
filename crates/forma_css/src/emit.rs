//! Filesystem emission
//!
//! Each spec becomes `<name>.css` in the output directory, plus one
//! `theme.css` variable sheet. Stylesheets are independent of each other,
//! so they generate in parallel.

use crate::stylesheet::generate_css;
use crate::theme_css::generate_theme_css;
use forma_core::Diagnostics;
use forma_spec::ComponentSpec;
use forma_theme::TokenTables;
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CssEmitError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One file written to disk
#[derive(Debug)]
pub struct EmittedFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub diagnostics: Diagnostics,
}

/// Emit stylesheets for every spec plus the theme variable sheet
pub fn generate_all_css(
    specs: &[ComponentSpec],
    tables: &TokenTables,
    out_dir: &Path,
) -> Result<Vec<EmittedFile>, CssEmitError> {
    std::fs::create_dir_all(out_dir).map_err(|source| CssEmitError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut files = specs
        .par_iter()
        .map(|spec| {
            let css = generate_css(spec);
            let path = out_dir.join(format!("{}.css", spec.name));
            write_file(&path, &css.text)?;
            Ok(EmittedFile {
                path,
                bytes: css.text.len(),
                diagnostics: css.diagnostics,
            })
        })
        .collect::<Result<Vec<_>, CssEmitError>>()?;

    let theme = generate_theme_css(tables);
    let path = out_dir.join("theme.css");
    write_file(&path, &theme)?;
    files.push(EmittedFile {
        path,
        bytes: theme.len(),
        diagnostics: Diagnostics::new(),
    });

    Ok(files)
}

fn write_file(path: &Path, text: &str) -> Result<(), CssEmitError> {
    std::fs::write(path, text).map_err(|source| CssEmitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "generated stylesheet");
    Ok(())
}
