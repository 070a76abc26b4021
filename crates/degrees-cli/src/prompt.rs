//! Line-oriented prompting: reading names and disambiguating persons.

use anyhow::Result;
use degrees_core::graph::{Graph, PersonId};
use degrees_core::names::{Resolution, resolve};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Resolve `name` to a single person, asking for an id when several
    /// persons share the name. `None` if nobody matches or the chosen id is
    /// not one of the candidates.
    pub fn pick_person(&mut self, graph: &Graph, name: &str) -> Result<Option<PersonId>> {
        let resolution = resolve(graph, name);
        match &resolution {
            Resolution::Unique(id) => Ok(Some(id.clone())),
            Resolution::NotFound { suggestions } => {
                if !suggestions.is_empty() {
                    writeln!(self.output, "Did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(None)
            }
            Resolution::Ambiguous(ids) => {
                writeln!(self.output, "Which '{}'?", name)?;
                for id in ids {
                    let Some(person) = graph.person(id.as_str()) else {
                        continue;
                    };
                    let birth = person.birth.map_or_else(String::new, |b| b.to_string());
                    writeln!(
                        self.output,
                        "ID: {}, Name: {}, Birth: {}",
                        id, person.name, birth
                    )?;
                }
                let picked = self.ask("Intended Person ID: ")?;
                Ok(picked.and_then(|p| resolution.choose(&p)))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
