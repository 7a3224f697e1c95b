use super::blocks::*;
use super::text::RichText;
use crate::types::BlockId;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Macro to reduce boilerplate in BlockValue accessor methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            BlockValue::Page($pattern) => $result,
            BlockValue::CollectionViewPage($pattern) => $result,
            BlockValue::CollectionView($pattern) => $result,
            BlockValue::Column($pattern) => $result,
            BlockValue::ColumnList($pattern) => $result,
            BlockValue::Text($pattern) => $result,
            BlockValue::Header($pattern) => $result,
            BlockValue::SubHeader($pattern) => $result,
            BlockValue::SubSubHeader($pattern) => $result,
            BlockValue::BulletedList($pattern) => $result,
            BlockValue::NumberedList($pattern) => $result,
            BlockValue::Quote($pattern) => $result,
            BlockValue::ToDo($pattern) => $result,
            BlockValue::Toggle($pattern) => $result,
            BlockValue::Callout($pattern) => $result,
            BlockValue::Divider($pattern) => $result,
            BlockValue::Code($pattern) => $result,
            BlockValue::Equation($pattern) => $result,
            BlockValue::TableOfContents($pattern) => $result,
            BlockValue::Image($pattern) => $result,
            BlockValue::Video($pattern) => $result,
            BlockValue::Audio($pattern) => $result,
            BlockValue::File($pattern) => $result,
            BlockValue::Bookmark($pattern) => $result,
            BlockValue::Embed($pattern) => $result,
            BlockValue::Loom($pattern) => $result,
            BlockValue::Maps($pattern) => $result,
            BlockValue::Figma($pattern) => $result,
            BlockValue::Gist($pattern) => $result,
            BlockValue::Codepen($pattern) => $result,
            BlockValue::Drive($pattern) => $result,
            BlockValue::Framer($pattern) => $result,
            BlockValue::Pdf($pattern) => $result,
            BlockValue::Invision($pattern) => $result,
            BlockValue::Tweet($pattern) => $result,
            BlockValue::Typeform($pattern) => $result,
            BlockValue::Unknown($pattern) => $result,
        }
    };
}

/// A block record's payload: one variant per block kind, discriminated
/// by the wire `type` tag.
///
/// The closed sum keeps exhaustiveness checking when variants are added;
/// tags without a variant land in [`UnknownBlock`] rather than failing
/// the whole record map. The serde impls below handle the tag by hand —
/// the wire stores it inline next to the payload fields.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockValue {
    // Layout
    Page(PageBlock),
    CollectionViewPage(CollectionViewPageBlock),
    CollectionView(CollectionViewBlock),
    Column(ColumnBlock),
    ColumnList(ColumnListBlock),
    // Basic
    Text(TextBlock),
    Header(TextBlock),
    SubHeader(TextBlock),
    SubSubHeader(TextBlock),
    BulletedList(ListBlock),
    NumberedList(ListBlock),
    Quote(TextBlock),
    ToDo(ToDoBlock),
    Toggle(ListBlock),
    Callout(CalloutBlock),
    Divider(DividerBlock),
    // Media
    Code(CodeBlock),
    Equation(TextBlock),
    TableOfContents(TableOfContentsBlock),
    Image(MediaBlock),
    Video(MediaBlock),
    Audio(MediaBlock),
    File(FileBlock),
    Bookmark(BookmarkBlock),
    // Embeds
    Embed(EmbedBlock),
    Loom(EmbedBlock),
    Maps(EmbedBlock),
    Figma(EmbedBlock),
    Gist(EmbedBlock),
    Codepen(EmbedBlock),
    Drive(EmbedBlock),
    Framer(EmbedBlock),
    Pdf(EmbedBlock),
    Invision(EmbedBlock),
    Tweet(EmbedBlock),
    Typeform(EmbedBlock),
    // Fallback for tags without a variant
    Unknown(UnknownBlock),
}

impl Serialize for BlockValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut value = match_all_blocks!(self, b => serde_json::to_value(b))
            .map_err(serde::ser::Error::custom)?;
        // UnknownBlock carries its tag itself; every other variant gets
        // the tag injected next to its payload fields.
        if !matches!(self, BlockValue::Unknown(_)) {
            if let Value::Object(fields) = &mut value {
                fields.insert("type".to_string(), Value::from(self.block_type()));
            }
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        fn variant<T, E>(raw: Value, wrap: fn(T) -> BlockValue) -> Result<BlockValue, E>
        where
            T: DeserializeOwned,
            E: serde::de::Error,
        {
            serde_json::from_value(raw)
                .map(wrap)
                .map_err(serde::de::Error::custom)
        }

        let raw = Value::deserialize(deserializer)?;
        let tag = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match tag.as_str() {
            "page" => variant(raw, BlockValue::Page),
            "collection_view_page" => variant(raw, BlockValue::CollectionViewPage),
            "collection_view" => variant(raw, BlockValue::CollectionView),
            "column" => variant(raw, BlockValue::Column),
            "column_list" => variant(raw, BlockValue::ColumnList),
            "text" => variant(raw, BlockValue::Text),
            "header" => variant(raw, BlockValue::Header),
            "sub_header" => variant(raw, BlockValue::SubHeader),
            "sub_sub_header" => variant(raw, BlockValue::SubSubHeader),
            "bulleted_list" => variant(raw, BlockValue::BulletedList),
            "numbered_list" => variant(raw, BlockValue::NumberedList),
            "quote" => variant(raw, BlockValue::Quote),
            "to_do" => variant(raw, BlockValue::ToDo),
            "toggle" => variant(raw, BlockValue::Toggle),
            "callout" => variant(raw, BlockValue::Callout),
            "divider" => variant(raw, BlockValue::Divider),
            "code" => variant(raw, BlockValue::Code),
            "equation" => variant(raw, BlockValue::Equation),
            "table_of_contents" => variant(raw, BlockValue::TableOfContents),
            "image" => variant(raw, BlockValue::Image),
            "video" => variant(raw, BlockValue::Video),
            "audio" => variant(raw, BlockValue::Audio),
            "file" => variant(raw, BlockValue::File),
            "bookmark" => variant(raw, BlockValue::Bookmark),
            "embed" => variant(raw, BlockValue::Embed),
            "loom" => variant(raw, BlockValue::Loom),
            "maps" => variant(raw, BlockValue::Maps),
            "figma" => variant(raw, BlockValue::Figma),
            "gist" => variant(raw, BlockValue::Gist),
            "codepen" => variant(raw, BlockValue::Codepen),
            "drive" => variant(raw, BlockValue::Drive),
            "framer" => variant(raw, BlockValue::Framer),
            "pdf" => variant(raw, BlockValue::Pdf),
            "invision" => variant(raw, BlockValue::Invision),
            "tweet" => variant(raw, BlockValue::Tweet),
            "typeform" => variant(raw, BlockValue::Typeform),
            _ => variant(raw, BlockValue::Unknown),
        }
    }
}

impl BlockValue {
    /// Common fields shared by every variant
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// The block's id
    pub fn id(&self) -> &BlockId {
        &self.common().id
    }

    /// Whether the block is live (not trashed)
    pub fn alive(&self) -> bool {
        self.common().alive
    }

    /// The wire `type` tag
    pub fn block_type(&self) -> &str {
        match self {
            BlockValue::Page(_) => "page",
            BlockValue::CollectionViewPage(_) => "collection_view_page",
            BlockValue::CollectionView(_) => "collection_view",
            BlockValue::Column(_) => "column",
            BlockValue::ColumnList(_) => "column_list",
            BlockValue::Text(_) => "text",
            BlockValue::Header(_) => "header",
            BlockValue::SubHeader(_) => "sub_header",
            BlockValue::SubSubHeader(_) => "sub_sub_header",
            BlockValue::BulletedList(_) => "bulleted_list",
            BlockValue::NumberedList(_) => "numbered_list",
            BlockValue::Quote(_) => "quote",
            BlockValue::ToDo(_) => "to_do",
            BlockValue::Toggle(_) => "toggle",
            BlockValue::Callout(_) => "callout",
            BlockValue::Divider(_) => "divider",
            BlockValue::Code(_) => "code",
            BlockValue::Equation(_) => "equation",
            BlockValue::TableOfContents(_) => "table_of_contents",
            BlockValue::Image(_) => "image",
            BlockValue::Video(_) => "video",
            BlockValue::Audio(_) => "audio",
            BlockValue::File(_) => "file",
            BlockValue::Bookmark(_) => "bookmark",
            BlockValue::Embed(_) => "embed",
            BlockValue::Loom(_) => "loom",
            BlockValue::Maps(_) => "maps",
            BlockValue::Figma(_) => "figma",
            BlockValue::Gist(_) => "gist",
            BlockValue::Codepen(_) => "codepen",
            BlockValue::Drive(_) => "drive",
            BlockValue::Framer(_) => "framer",
            BlockValue::Pdf(_) => "pdf",
            BlockValue::Invision(_) => "invision",
            BlockValue::Tweet(_) => "tweet",
            BlockValue::Typeform(_) => "typeform",
            BlockValue::Unknown(b) => &b.block_type,
        }
    }

    /// Ordered child references, for the variants that nest content.
    ///
    /// Unknown blocks expose their `content` too, so containers added
    /// server-side keep their children in assembled trees.
    pub fn content(&self) -> Option<&[BlockId]> {
        match self {
            BlockValue::Page(b) => b.content.as_deref(),
            BlockValue::Column(b) => b.content.as_deref(),
            BlockValue::ColumnList(b) => b.content.as_deref(),
            BlockValue::BulletedList(b) => b.content.as_deref(),
            BlockValue::NumberedList(b) => b.content.as_deref(),
            BlockValue::Toggle(b) => b.content.as_deref(),
            BlockValue::Unknown(b) => b.content.as_deref(),
            _ => None,
        }
    }

    /// The styled title run, for the variants that carry one.
    pub fn title(&self) -> Option<&RichText> {
        match self {
            BlockValue::Text(b)
            | BlockValue::Header(b)
            | BlockValue::SubHeader(b)
            | BlockValue::SubSubHeader(b)
            | BlockValue::Quote(b)
            | BlockValue::Equation(b) => b.properties.as_ref().map(|p| &p.title),
            BlockValue::BulletedList(b) | BlockValue::NumberedList(b) | BlockValue::Toggle(b) => {
                b.properties.as_ref().map(|p| &p.title)
            }
            BlockValue::ToDo(b) => b.properties.as_ref().map(|p| &p.title),
            BlockValue::Callout(b) => b.properties.as_ref().map(|p| &p.title),
            BlockValue::Code(b) => b.properties.as_ref().map(|p| &p.title),
            _ => None,
        }
    }

    /// Raw property cells, for blocks that can be collection rows.
    pub fn row_properties(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            BlockValue::Page(b) => b.properties.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block_json(kind: &str) -> Value {
        json!({
            "id": "1d748958-865c-4cf3-97d6-c996756cd77e",
            "version": 12,
            "type": kind,
            "alive": true,
            "parent_table": "space",
            "properties": { "title": [["hi"]] }
        })
    }

    #[test]
    fn test_tag_picks_the_variant() {
        let value: BlockValue = serde_json::from_value(block_json("text")).unwrap();
        assert!(matches!(value, BlockValue::Text(_)));
        assert_eq!(value.block_type(), "text");
        assert_eq!(
            value.id().as_str(),
            "1d748958-865c-4cf3-97d6-c996756cd77e"
        );
    }

    #[test]
    fn test_unrecognized_tag_falls_back_to_unknown() {
        let mut raw = block_json("transclusion_container");
        raw["content"] = json!(["00000000-0000-0000-0000-000000000001"]);
        let value: BlockValue = serde_json::from_value(raw).unwrap();

        assert_eq!(value.block_type(), "transclusion_container");
        let content = value.content().expect("unknown containers keep children");
        assert_eq!(content.len(), 1);
    }

    #[test]
    fn test_round_trips_through_the_wire_tag() {
        let value: BlockValue = serde_json::from_value(block_json("sub_header")).unwrap();
        let wire = serde_json::to_value(&value).unwrap();
        assert_eq!(wire["type"], "sub_header");
        assert_eq!(wire["version"], 12);
    }

    #[test]
    fn test_title_accessor_reads_the_text_family() {
        let value: BlockValue = serde_json::from_value(block_json("quote")).unwrap();
        let title = value.title().unwrap();
        assert_eq!(crate::model::plain_text(title), "hi");
    }
}
