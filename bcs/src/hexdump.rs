//! Debugging utility: render a byte slice as offset/hex/ASCII columns, in
//! the spirit of the reference implementation's `hexdump` helper.

const BYTES_PER_LINE: usize = 16;

/// Render `data` as a multi-line hex dump: an 8-digit offset, 16
/// space-separated hex bytes (with an extra gap at the half-way point),
/// and the printable-ASCII rendering of the same bytes.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (line_index, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let offset = line_index * BYTES_PER_LINE;
        out.push_str(&format!("{offset:08x}  "));

        for i in 0..BYTES_PER_LINE {
            if i == BYTES_PER_LINE / 2 {
                out.push(' ');
            }
            match chunk.get(i) {
                Some(byte) => out.push_str(&format!("{byte:02x} ")),
                None => out.push_str("   "),
            }
        }

        out.push(' ');
        for &byte in chunk {
            let ch = byte as char;
            out.push(if ch.is_ascii_graphic() || ch == ' ' {
                ch
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
