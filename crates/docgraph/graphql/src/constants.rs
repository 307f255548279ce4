pub const QUERY_TYPE_NAME: &str = "Query";
pub const MUTATION_TYPE_NAME: &str = "Mutation";

pub const NODE_TYPE_NAME: &str = "Node";
pub const PAGE_INFO_TYPE_NAME: &str = "PageInfo";
pub const CONNECTION_SUFFIX: &str = "Connection";
pub const EDGE_SUFFIX: &str = "Edge";

pub const ID_FIELD: &str = "id";
pub const NODE_FIELD: &str = "node";

// relay field names
pub const EDGES_FIELD: &str = "edges";
pub const PAGE_INFO_FIELD: &str = "pageInfo";
pub const TOTAL_COUNT_FIELD: &str = "totalCount";
pub const CURSOR_FIELD: &str = "cursor";

pub const CURSOR_PREFIX: &str = "arrayconnection";
