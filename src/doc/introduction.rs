/*!
# Introductory Tutorial for Calc

Run the executable from a terminal. A blue `Calc` tag marks the prompt.
Type an expression and press ENTER.

<pre><code>&nbsp;> 1 + 2 * 3
&nbsp;  7
&nbsp;> 0.1 + 0.2
&nbsp;  0.3
</code></pre>

Numbers are decimal and carry 256 significant digits, so `0.1 + 0.2` is
exactly `0.3`. Results are rounded to 128 decimal places and long results
are cut at the display width with `...`.

## Literals

Hexadecimal and binary literals may have a fractional part and may use
`_` as a digit separator. A number may end with a magnitude suffix.

<pre><code>&nbsp;> 0xA.8
&nbsp;  10.5
&nbsp;> 0b1111_0000
&nbsp;  240
&nbsp;> 1.5k + 250
&nbsp;  1750
&nbsp;> 2mm
&nbsp;  0.002
</code></pre>

Single letter suffixes scale up: `k` `m` `g` `t` `p`, then `ee`, `z`, `y`.
Doubled letters scale down: `mm` `uu` `nn` `pp` `ff` `aa` `zz` `yy`.

## The `@` continuation

`@` is the previous result. A line that starts with an operator continues
from it.

<pre><code>&nbsp;> 2 + 2
&nbsp;  4
&nbsp;> * 10
&nbsp;  40
&nbsp;> sqrt(@)
&nbsp;  6.324555320336758663997787088865437067439110278650433653715009705585188877...
</code></pre>

Before the first result `@` is empty and using it is an error.
`@` cannot be assigned.

## Variables and functions

Assignments bind the expression, not only its value. A variable can be
reassigned in terms of itself.

<pre><code>&nbsp;> x = 5
&nbsp;  5
&nbsp;> x = x + 1
&nbsp;  6
&nbsp;> f(a, b) = a ^ 2 + b
&nbsp;  f(a, b) = a ^ 2 + b
&nbsp;> f(x, 1)
&nbsp;  37
</code></pre>

## Formatting

`hex`, `bin`, `eng`, `fix` and `_exp` format a number for display. Inside
a larger expression they are ignored, so `hex(255) + 1` is `256`.
Negative numbers are shown in two's complement.

<pre><code>&nbsp;> hex(-255)
&nbsp;  0xF01
&nbsp;> eng(12345)
&nbsp;  12.345e+3
</code></pre>

## Commands

A line holding a single word is a command.

| Command | |
|---|---|
| `history` | previous lines, newest first |
| `clear` | forget the history |
| `cls` | clear the screen |
| `ls` | variables and `@` |
| `la` | everything in scope |
| `func` | builtin formatters and user defined functions |
| `exit`, `quit` | leave Calc |

CTRL-C does not exit. History is kept in `~/.calc.history` between
sessions.

*/
