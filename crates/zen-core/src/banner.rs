/// The creature printed under the version line.
///
/// Four lines, each `\n`-terminated.  The last line keeps its trailing space.
pub const BANNER: &str = concat!(
    "  _  _(o)_(o)_  _\n",
    "._\\`:_ F S M _:' \\_,\n",
    "    / (`---'\\ `-.\n",
    ",-`  _)    (_, \n",
);
