use std::fmt::Display;

use serde::{de::Error, Deserialize};

use crate::utils::u64_to_hex_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Latest,
    Finalized,
    Number(u64),
}

impl BlockTag {
    /// Renders the tag the way `eth_getBlockByNumber` expects it.
    pub fn to_rpc_param(&self) -> String {
        match self {
            Self::Latest => "latest".to_string(),
            Self::Finalized => "finalized".to_string(),
            Self::Number(num) => u64_to_hex_string(*num),
        }
    }
}

impl From<u64> for BlockTag {
    fn from(num: u64) -> Self {
        BlockTag::Number(num)
    }
}

impl Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = match self {
            Self::Latest => "latest".to_string(),
            Self::Finalized => "finalized".to_string(),
            Self::Number(num) => num.to_string(),
        };

        write!(f, "{formatted}")
    }
}

impl<'de> Deserialize<'de> for BlockTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let block: String = serde::Deserialize::deserialize(deserializer)?;
        let parse_error = D::Error::custom("could not parse block tag");

        let block_tag = match block.as_str() {
            "latest" => BlockTag::Latest,
            "finalized" => BlockTag::Finalized,
            _ => match block.strip_prefix("0x") {
                Some(hex_block) => {
                    let num = u64::from_str_radix(hex_block, 16).map_err(|_| parse_error)?;

                    BlockTag::Number(num)
                }
                None => {
                    let num = block.parse().map_err(|_| parse_error)?;

                    BlockTag::Number(num)
                }
            },
        };

        Ok(block_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::BlockTag;

    #[test]
    fn test_block_tag_rpc_param() {
        assert_eq!(BlockTag::Number(26478701).to_rpc_param(), "0x194086d");
        assert_eq!(BlockTag::Latest.to_rpc_param(), "latest");
        assert_eq!(BlockTag::Finalized.to_rpc_param(), "finalized");
    }

    #[test]
    fn test_block_tag_deserialize() {
        let tag: BlockTag = serde_json::from_str("\"0x194086d\"").unwrap();
        assert_eq!(tag, BlockTag::Number(26478701));

        let tag: BlockTag = serde_json::from_str("\"26478701\"").unwrap();
        assert_eq!(tag, BlockTag::Number(26478701));

        let tag: BlockTag = serde_json::from_str("\"finalized\"").unwrap();
        assert_eq!(tag, BlockTag::Finalized);

        assert!(serde_json::from_str::<BlockTag>("\"pending\"").is_err());
    }
}
