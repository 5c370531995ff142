use crate::context::SearchContext;
use crate::error::{SearchError, SearchResult};
use crate::search::{self, Pattern};
use crate::value::{Value, offset_from_value};

/// index(pattern [, offset]) - Position of the first occurrence of `pattern`
/// in `receiver`, or nil.
pub fn string_index(
    ctx: &mut SearchContext,
    receiver: &[u8],
    args: &[Value],
) -> SearchResult<Value> {
    let (pattern_arg, offset_arg) = match args {
        [pattern] => (pattern, None),
        [pattern, offset] => (pattern, Some(offset)),
        _ => {
            return Err(SearchError::WrongArgumentCount {
                given: args.len(),
                min: 1,
                max: 2,
            });
        }
    };

    let pattern = Pattern::from_value(pattern_arg)?;
    let offset = offset_arg.map(offset_from_value).transpose()?;

    let found = search::index(receiver, &pattern, offset, ctx.recorder_mut());
    Ok(found
        .and_then(|pos| i64::try_from(pos).ok())
        .map_or(Value::Nil, Value::Int))
}
