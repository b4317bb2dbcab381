use std::fmt;

/// Records a nested call trace with one `|  ` indent per depth level.
///
/// [`Tracer::call`] opens a frame and logs `name(args)`; [`Tracer::ret`]
/// closes the innermost frame and logs `-> name(args) = result` at the
/// frame's own depth.
///
/// ```
/// use algolab_trace::Tracer;
///
/// let mut t = Tracer::new();
/// t.call("factorial", "2");
/// t.call("factorial", "1");
/// t.ret("1");
/// t.ret("2");
///
/// assert_eq!(t.output(), "\
/// factorial(2)
/// |  factorial(1)
/// |  -> factorial(1) = 1
/// -> factorial(2) = 2");
/// ```
#[derive(Default)]
pub struct Tracer {
    frames: Vec<(String, String)>,
    lines: Vec<String>,
}

impl Tracer {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Current nesting depth (open frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Opens a frame.
    pub fn call(&mut self, name: &str, args: &str) {
        let indent = "|  ".repeat(self.frames.len());
        self.lines.push(format!("{indent}{name}({args})"));
        self.frames.push((name.to_string(), args.to_string()));
    }

    /// Closes the innermost frame with its result.
    ///
    /// # Panics
    ///
    /// Panics when no frame is open.
    pub fn ret(&mut self, result: &str) {
        let (name, args) = self.frames.pop().expect("ret without a matching call");
        let indent = "|  ".repeat(self.frames.len());
        self.lines.push(format!("{indent}-> {name}({args}) = {result}"));
    }

    /// Recorded lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole trace as one newline-joined string.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output())
    }
}
