/*!

This is the long-form manual for `seat_forecast` and `seatcast`.

## Draw tables

A forecast is a table of simulation draws: every draw is one possible
outcome of the election, with the number of seats won by each party.
The tables come in two layouts.

### Long layout

One row per draw and per party. The `draw` column identifies the draw,
the `party` column the party.

```text
draw,party,seats
0,AD,110
0,PS,80
1,AD,95
1,PS,110
```

### Wide layout

One row per draw, one column per party. The position of the row identifies
the draw.

```text
AD,PS,IL
110,80,10
95,110,5
```

A table is read as long if its first record (or its header, for CSV files)
has both a `draw` and a `party` field. Otherwise it is read as wide.
A party that does not appear in a draw has 0 seats in that draw.

The JSON inputs follow the same rules, as arrays of objects:
`[{"draw": 0, "party": "AD", "seats": 110}, ...]` or
`[{"AD": 110, "PS": 80}, ...]`.

## Statistics

- **bloc majority**: the fraction of the draws in which the seats of a bloc
  reach the majority threshold (116 by default, inclusive).
- **most seats**: the fraction of the draws in which a party wins strictly
  more seats than each of its competitors. Requires the wide layout.
- **bloc comparison**: the fraction of the draws in which a bloc wins
  strictly more seats than another bloc. Requires the wide layout.

Long tables can be converted with the `--pivot-wide` flag to compute the
last two statistics.

Probabilities are displayed as rounded percentages. Values that would be
displayed as `100%` or `0%` are displayed as `>99%` and `<1%`.

## Configuration

`seatcast` comes with the default blocs of the Portuguese parliament
(230 seats). Other settings can be provided as a JSON file:

```json
{
  "majorityThreshold": 116,
  "blocs": [
    {"name": "Left Bloc", "parties": ["PS", "BE", "CDU"]},
    {"name": "Right Bloc", "parties": ["AD", "IL"]}
  ],
  "excludedParties": ["OTH"],
  "mostSeats": [{"target": "AD", "competitors": ["PS"]}],
  "blocComparisons": [{"blocA": "Right Bloc", "blocB": "Left Bloc"}]
}
```

All the fields are optional. The blocs referred to in `blocComparisons` must
be defined in `blocs`. `excludedParties` are left out of the per-party seat
forecast.

 */
