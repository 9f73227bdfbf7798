/*!
# Appendix A: Errors

The failing line is echoed below the message. Errors never end the
session.

| Message | Kept in history |
|---|---|
| `Malformed literal; 0x1.2.3` | yes |
| `Invalid expression` with detail | yes |
| `` `@` is empty`` | yes |
| `` `@` cannot be assigned`` | yes |
| `Unknown Command` | no |
| failures while evaluating, such as `Undefined symbol y` | no |

An invalid expression is a syntax error, a value of the wrong type, or a
function called with the wrong number of arguments. Evaluation failures
include division by zero, mismatched collection sizes, and recursion
deeper than 512 calls.

# Functions

`abs sign sqrt cbrt exp log(x[, base]) log2 log10 sin cos tan asin acos
atan atan2 sinh cosh tanh floor ceil round(x[, n]) mod gcd lcm factorial
pow min max sum size transpose random`

Constants: `pi` `e` `tau` `phi` `LN2` `LN10` `SQRT2`.

*/
