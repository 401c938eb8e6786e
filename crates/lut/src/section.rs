/// Marker-delimited sections of a table file, in the order they must appear
///
/// The reader only ever scans forward, so sections must follow this order.
/// Anything before a marker that is not itself the expected marker is treated
/// as filler and skipped, including comments, blank lines, and free text.
///
/// ```text
/// [Version]                   declared table version
/// [Reader version]            reader schema the table was written for
/// [Table dimension]           2 or 3
/// [Number of table levels]    1 for 2-D tables
/// [Levels]                    one row of counts (and coordinate) per level
/// [Variables]                 count followed by one name per line
///
/// <Data> ... </Data>              \
/// <Triangles> ... </Triangles>     > repeated for every level in order
/// <Hull> ... </Hull>              /
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Version,
    ReaderVersion,
    Dimension,
    LevelCount,
    Levels,
    Variables,
    Data,
    Triangles,
    Hull,
}

impl Section {
    /// Line that opens the section
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Version => "[Version]",
            Section::ReaderVersion => "[Reader version]",
            Section::Dimension => "[Table dimension]",
            Section::LevelCount => "[Number of table levels]",
            Section::Levels => "[Levels]",
            Section::Variables => "[Variables]",
            Section::Data => "<Data>",
            Section::Triangles => "<Triangles>",
            Section::Hull => "<Hull>",
        }
    }

}

/// Per-level sections, each closed by a matching `</...>` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Block {
    Data,
    Triangles,
    Hull,
}

impl Block {
    pub(crate) fn section(&self) -> Section {
        match self {
            Block::Data => Section::Data,
            Block::Triangles => Section::Triangles,
            Block::Hull => Section::Hull,
        }
    }

    /// Line that closes the block
    pub(crate) fn closing_marker(&self) -> &'static str {
        match self {
            Block::Data => "</Data>",
            Block::Triangles => "</Triangles>",
            Block::Hull => "</Hull>",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Section::Version => "version",
            Section::ReaderVersion => "reader version",
            Section::Dimension => "table dimension",
            Section::LevelCount => "number of table levels",
            Section::Levels => "levels",
            Section::Variables => "variables",
            Section::Data => "data",
            Section::Triangles => "triangles",
            Section::Hull => "hull",
        };
        write!(f, "{name}")
    }
}
