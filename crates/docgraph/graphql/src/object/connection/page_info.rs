use async_graphql::dynamic::Object;

use crate::constants::PAGE_INFO_TYPE_NAME;
use crate::mapping::PAGE_INFO_TYPE_MAPPING;
use crate::object::{value_object, BasicObject};

#[derive(Debug)]
pub struct PageInfoObject;

impl BasicObject for PageInfoObject {
    fn type_name(&self) -> &str {
        PAGE_INFO_TYPE_NAME
    }

    fn objects(&self) -> Vec<Object> {
        vec![value_object(self.type_name(), &PAGE_INFO_TYPE_MAPPING)]
    }
}
