// crates/normalize_line_endings/src/lib.rs

/// Replaces every "\r\n" pair in the input with a single "\n".
///
/// The replacement is applied until no pair is left, so a run of carriage
/// returns directly before a newline collapses into that newline and the
/// output never contains "\r\n". Lone carriage returns are left untouched.
pub fn normalize_line_endings(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut pending_cr = 0usize;

    for ch in input.chars() {
        match ch {
            '\r' => pending_cr += 1,
            '\n' => {
                pending_cr = 0;
                output.push('\n');
            }
            _ => {
                flush_carriage_returns(&mut output, &mut pending_cr);
                output.push(ch);
            }
        }
    }
    flush_carriage_returns(&mut output, &mut pending_cr);
    output
}

fn flush_carriage_returns(output: &mut String, pending_cr: &mut usize) {
    for _ in 0..*pending_cr {
        output.push('\r');
    }
    *pending_cr = 0;
}
