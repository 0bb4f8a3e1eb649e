//! The nested string table behind [`TranslationService`](super::TranslationService).
//!
//! A tree maps a language tag to a [`Node`]; branches are addressed with
//! `.`-separated keys such as `home.title`. Trees can be built in code,
//! loaded from TOML / YAML / JSON, and layered with [`ResourceTree::merge`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One level of the resource tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A translated leaf.
    Text(String),
    /// A namespace of further nodes.
    Branch(BTreeMap<String, Node>),
    /// Any other leaf (numbers, booleans, arrays). Never resolves to text.
    Scalar(serde_json::Value),
}

/// Why a tree walk did not end on a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("language `{0}` is not present in the resource tree")]
    UnknownLanguage(String),
    #[error("segment `{segment}` of `{key}` is missing")]
    MissingSegment { key: String, segment: String },
    #[error("`{0}` names a namespace, not a string")]
    NotALeaf(String),
    #[error("`{0}` resolves to a non-string value")]
    NonStringLeaf(String),
    #[error("`{0}` resolves to an empty string")]
    EmptyLeaf(String),
}

/// Failure to read or parse a resource file.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read resource file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML resources: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid YAML resources: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON resources: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported resource file extension: {0}")]
    UnsupportedFormat(String),
}

/// Language tag → namespace tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTree {
    languages: BTreeMap<String, Node>,
}

impl ResourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ResourceError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ResourceError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ResourceError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads a tree from disk, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let raw = fs::read_to_string(path)?;
        match extension.as_str() {
            "toml" => Self::from_toml_str(&raw),
            "yaml" | "yml" => Self::from_yaml_str(&raw),
            "json" => Self::from_json_str(&raw),
            other => Err(ResourceError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Supported language tags, sorted.
    pub fn languages(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }

    /// Sets `dotted_key` under `tag` to `text`, creating namespaces as needed.
    ///
    /// A leaf standing where a namespace is needed is replaced by a namespace.
    pub fn insert(&mut self, tag: &str, dotted_key: &str, text: impl Into<String>) {
        let segments: Vec<&str> = dotted_key.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };
        let mut current = self
            .languages
            .entry(tag.to_string())
            .or_insert_with(|| Node::Branch(BTreeMap::new()));
        for segment in parents {
            let children = ensure_branch(current);
            current = children
                .entry((*segment).to_string())
                .or_insert_with(|| Node::Branch(BTreeMap::new()));
        }
        ensure_branch(current).insert((*last).to_string(), Node::Text(text.into()));
    }

    /// Overlays `other` onto this tree. Leaves from `other` win.
    pub fn merge(&mut self, other: ResourceTree) {
        for (tag, node) in other.languages {
            match self.languages.get_mut(&tag) {
                Some(existing) => merge_node(existing, node),
                None => {
                    self.languages.insert(tag, node);
                }
            }
        }
    }

    /// Walks `dotted_key` under `tag`, reporting why the walk failed.
    pub fn walk(&self, tag: &str, dotted_key: &str) -> Result<&str, LookupError> {
        let mut current = self
            .languages
            .get(tag)
            .ok_or_else(|| LookupError::UnknownLanguage(tag.to_string()))?;
        for segment in dotted_key.split('.') {
            let next = match current {
                Node::Branch(children) => children.get(segment),
                Node::Text(_) | Node::Scalar(_) => None,
            };
            current = next.ok_or_else(|| LookupError::MissingSegment {
                key: dotted_key.to_string(),
                segment: segment.to_string(),
            })?;
        }
        match current {
            Node::Text(text) if text.is_empty() => {
                Err(LookupError::EmptyLeaf(dotted_key.to_string()))
            }
            Node::Text(text) => Ok(text.as_str()),
            Node::Branch(_) => Err(LookupError::NotALeaf(dotted_key.to_string())),
            Node::Scalar(_) => Err(LookupError::NonStringLeaf(dotted_key.to_string())),
        }
    }

    /// Typed traversal: `Some` only when the walk ends on a string.
    pub fn resolve(&self, tag: &str, dotted_key: &str) -> Option<&str> {
        self.walk(tag, dotted_key).ok()
    }

    /// The English / Chinese strings shipped with the site.
    pub fn builtin() -> Self {
        let mut tree = Self::new();
        for (tag, entries) in [("en", BUILTIN_EN), ("zh", BUILTIN_ZH)] {
            for (key, text) in entries {
                tree.insert(tag, key, *text);
            }
        }
        tree
    }
}

fn ensure_branch(node: &mut Node) -> &mut BTreeMap<String, Node> {
    match node {
        Node::Branch(children) => children,
        leaf => {
            *leaf = Node::Branch(BTreeMap::new());
            ensure_branch(leaf)
        }
    }
}

fn merge_node(target: &mut Node, incoming: Node) {
    match (target, incoming) {
        (Node::Branch(existing), Node::Branch(children)) => {
            for (key, child) in children {
                match existing.get_mut(&key) {
                    Some(slot) => merge_node(slot, child),
                    None => {
                        existing.insert(key, child);
                    }
                }
            }
        }
        (slot, other) => *slot = other,
    }
}

const BUILTIN_EN: &[(&str, &str)] = &[
    ("home.title", "SCAI - Scientific AI Collaboration Framework"),
    ("home.subtitle", "Building scientific AI agent networks to accelerate research breakthroughs"),
    ("home.tokenButton", "Learn about our token"),
    ("home.networkStats", "Network Stats"),
    ("home.stakingData", "Staking Data"),
    ("home.totalStaked", "Total Staked"),
    ("home.currentRewards", "Current Rewards"),
    ("home.paperData", "Paper Data"),
    ("home.totalPapers", "Total Papers"),
    ("home.lastMonth", "Last Month"),
    ("home.tokenomics", "Tokenomics"),
    ("home.totalBurned", "Total Burned"),
    ("home.foundationFunds", "Foundation Funds"),
    ("home.roadmap", "Project Roadmap"),
    ("home.joinCommunity", "Join our research community"),
    ("storage.uploadPanel", "Upload Panel"),
    ("storage.dragDrop", "Drag & drop files here"),
    ("storage.orClick", "or click to browse"),
    ("storage.selectFiles", "Select Files"),
    ("storage.signUpload", "Sign & Upload"),
    ("storage.connectWallet", "Connect Wallet"),
    ("storage.uploadHistory", "Upload History"),
    ("storage.storageNodes", "Storage Nodes"),
    ("storage.nodeDetails", "Node Details"),
    ("storage.location", "Location"),
    ("storage.capacity", "Capacity"),
    ("storage.status", "Status"),
    ("storage.coordinates", "Coordinates"),
    ("common.loading", "Loading..."),
    ("common.error", "Error"),
    ("common.retry", "Retry"),
    ("common.noData", "No data available"),
    ("common.success", "Success"),
    ("common.warning", "Warning"),
    ("common.info", "Information"),
    ("token.title", "Token Allocation Model"),
    ("token.allocationDetails", "Allocation Details"),
    ("token.governance", "Governance"),
    ("token.staking", "Staking"),
    ("token.tokenomics", "Tokenomics"),
    ("token.proposals", "Active Proposals"),
    ("token.vote", "Vote"),
    ("token.stake", "Stake"),
    ("token.unstake", "Unstake"),
    ("token.connectWallet", "Connect Wallet"),
    ("token.stakingRewards", "Staking Rewards"),
    ("token.yourStake", "Your Stake"),
    ("token.totalStaked", "Total Staked"),
    ("token.apy", "APY"),
    ("ui.languageHint", "l: switch language"),
    ("ui.cacheHint", "c: clear cache"),
    ("ui.quitHint", "q: quit"),
    ("ui.cacheCleared", "Translation cache cleared"),
    ("ui.languageSwitched", "Language switched"),
    ("ui.particles", "Particles"),
    ("ui.fieldDetached", "Particle field unavailable"),
];

const BUILTIN_ZH: &[(&str, &str)] = &[
    ("home.title", "SCAI - 科学AI协作框架"),
    ("home.subtitle", "构建科学AI代理网络，加速科研突破"),
    ("home.tokenButton", "了解我们的虚拟货币"),
    ("home.networkStats", "网络统计"),
    ("home.stakingData", "质押数据"),
    ("home.totalStaked", "总质押量"),
    ("home.currentRewards", "当前奖励"),
    ("home.paperData", "论文数据"),
    ("home.totalPapers", "总论文数"),
    ("home.lastMonth", "上月新增"),
    ("home.tokenomics", "代币经济"),
    ("home.totalBurned", "总燃烧量"),
    ("home.foundationFunds", "基金会资金"),
    ("home.roadmap", "项目路线图"),
    ("home.joinCommunity", "加入我们的科研社区"),
    ("storage.uploadPanel", "上传面板"),
    ("storage.dragDrop", "拖拽文件到此处"),
    ("storage.orClick", "或点击浏览"),
    ("storage.selectFiles", "选择文件"),
    ("storage.signUpload", "签名并上传"),
    ("storage.connectWallet", "连接钱包"),
    ("storage.uploadHistory", "上传历史"),
    ("storage.storageNodes", "存储节点"),
    ("storage.nodeDetails", "节点详情"),
    ("storage.location", "位置"),
    ("storage.capacity", "容量"),
    ("storage.status", "状态"),
    ("storage.coordinates", "坐标"),
    ("common.loading", "加载中..."),
    ("common.error", "错误"),
    ("common.retry", "重试"),
    ("common.noData", "暂无数据"),
    ("common.success", "成功"),
    ("common.warning", "警告"),
    ("common.info", "信息"),
    ("token.title", "代币分配模型"),
    ("token.allocationDetails", "分配详情"),
    ("token.governance", "治理"),
    ("token.staking", "质押"),
    ("token.tokenomics", "代币经济"),
    ("token.proposals", "活跃提案"),
    ("token.vote", "投票"),
    ("token.stake", "质押"),
    ("token.unstake", "解除质押"),
    ("token.connectWallet", "连接钱包"),
    ("token.stakingRewards", "质押奖励"),
    ("token.yourStake", "您的质押"),
    ("token.totalStaked", "总质押量"),
    ("token.apy", "年化收益率"),
    ("ui.languageHint", "l: 切换语言"),
    ("ui.cacheHint", "c: 清除缓存"),
    ("ui.quitHint", "q: 退出"),
    ("ui.cacheCleared", "翻译缓存已清除"),
    ("ui.languageSwitched", "语言已切换"),
    ("ui.particles", "粒子"),
    ("ui.fieldDetached", "粒子背景不可用"),
];
