#[derive(Default)]
pub struct RunOutput {
    stdout: Vec<String>,
    errors: Vec<String>,
}

impl RunOutput {
    pub fn new() -> Self {
        RunOutput {
            stdout: vec![],
            errors: vec![],
        }
    }

    pub fn push_stdout(&mut self, s: String) {
        self.stdout.push(s);
    }

    // `e` must be rendered already
    pub fn push_error(&mut self, e: String) {
        self.errors.push(e);
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn stdout(&self) -> &[String] {
        &self.stdout
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn concat_results(&self) -> String {
        let mut lines = self.stdout.clone();
        lines.extend(self.errors.iter().cloned());

        if self.errors.len() > 1 {
            lines.push(format!("had {} errors in total", self.errors.len()));
        }

        lines.join("\n")
    }
}
