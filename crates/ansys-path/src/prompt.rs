//! Asking the user for an executable location.

use crate::product::{Product, ProductDescriptor};
use std::io::{self, BufRead, Write};

/// One round of asking for a path.
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    pub product: Product,
    pub descriptor: &'a ProductDescriptor,
    /// Zero on the first ask, incremented after every rejected answer.
    pub attempt: usize,
    /// The rejected answer from the previous round.
    pub previous: Option<&'a str>,
}

/// Source of user-supplied executable paths.
///
/// The resolver keeps asking until the answer names a valid executable. An
/// error ends the loop and is returned to the caller.
pub trait PathPrompt {
    fn request_path(&mut self, request: &PromptRequest<'_>) -> io::Result<String>;
}

impl<F> PathPrompt for F
where
    F: FnMut(&PromptRequest<'_>) -> io::Result<String>,
{
    fn request_path(&mut self, request: &PromptRequest<'_>) -> io::Result<String> {
        self(request)
    }
}

/// Interactive prompt on stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl PathPrompt for StdinPrompt {
    fn request_path(&mut self, request: &PromptRequest<'_>) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        let descriptor = request.descriptor;

        if request.attempt == 0 {
            writeln!(
                stdout,
                "Cached {} executable not found.\n\
                 You are about to enter the path of the {} executable ({}). \
                 It usually looks like 'directory/{}'.",
                descriptor.name, descriptor.name, descriptor.pattern, descriptor.pattern_path
            )?;
        } else {
            writeln!(
                stdout,
                "The supplied path is either: not a valid file path, or does not match '{}' name.",
                descriptor.pattern
            )?;
        }
        write!(stdout, "Enter the location of an {} executable: ", descriptor.name)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no path entered before end of input",
            ));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::product::ProductRegistry;

    #[test]
    fn test_closure_prompt() {
        let registry = ProductRegistry::new(Platform::Linux);
        let mut seen = Vec::new();
        let mut prompt = |request: &PromptRequest<'_>| -> io::Result<String> {
            seen.push(request.attempt);
            Ok(format!("/answer/{}", request.descriptor.pattern))
        };

        let request = PromptRequest {
            product: Product::Mapdl,
            descriptor: registry.descriptor(Product::Mapdl),
            attempt: 0,
            previous: None,
        };
        let answer = PathPrompt::request_path(&mut prompt, &request).unwrap();

        assert_eq!(answer, "/answer/ansysXXX");
        assert_eq!(seen, vec![0]);
    }
}
