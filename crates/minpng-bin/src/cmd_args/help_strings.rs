pub static STRIDE_HELP: &str = "Bytes between the starts of two rows in the input

Defaults to width * channels. Use it when rows in the input
carry padding after their last pixel, the padding is dropped.";

pub static FILTER_HELP: &str = "Scanline filter applied before compression

none stores rows as they are. sub, up, average and paeth apply
that filter to every row, adaptive picks the best one per row.
Filtering only changes the file size, never the decoded pixels.";

pub static UTF8_TEXT_HELP: &str = "Write text as UTF-8 instead of Latin-1

The png specification asks for Latin-1 text, so by default text
with other characters is refused. With this flag the raw UTF-8
bytes are stored, which most readers accept.";
